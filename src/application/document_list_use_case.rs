// ============================================================
// Layer 2 — Document List Use Case
// ============================================================
// Fetches every document the backend knows about. The backend
// already orders them newest first.

use crate::domain::document::Document;
use crate::domain::error::ClientError;
use crate::domain::traits::DocumentApi;

/// Shown when listing fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Failed to load documents.";

pub struct DocumentListUseCase<'a, A: DocumentApi> {
    api: &'a A,
}

impl<'a, A: DocumentApi> DocumentListUseCase<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub fn execute(&self) -> Result<Vec<Document>, ClientError> {
        let documents = self.api.list_documents()?;
        tracing::info!("Fetched {} documents", documents.len());
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{document, FakeApi};

    #[test]
    fn test_lists_documents() {
        let api = FakeApi {
            documents: vec![document(2, "b", None), document(1, "a", Some("s"))],
            ..FakeApi::default()
        };
        let docs = DocumentListUseCase::new(&api).execute().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(api.calls.get(), 1);
    }

    #[test]
    fn test_backend_error_text_is_kept() {
        let api = FakeApi::failing(503, Some("Service warming up"));
        let err = DocumentListUseCase::new(&api).execute().unwrap_err();
        assert_eq!(err.user_message(FAILURE_MESSAGE), "Service warming up");
    }
}
