// ============================================================
// Layer 2 — Summary Use Case
// ============================================================
// Holds the Summary tab's state: the summary on screen and the
// last error. A failed (re)generation keeps the previous summary
// visible next to the error.

use crate::domain::document::Summary;
use crate::domain::error::ClientError;
use crate::domain::traits::DocumentApi;

/// Shown when summarizing fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Failed to generate summary.";

#[derive(Debug)]
pub struct SummaryUseCase {
    document_id: i64,
    summary:     Option<Summary>,
    error:       Option<String>,
}

impl SummaryUseCase {
    /// `stored` is the summary text already saved on the document,
    /// used to seed the view before anything is generated.
    pub fn new(document_id: i64, stored: Option<&str>) -> Self {
        let summary = stored
            .filter(|s| !s.trim().is_empty())
            .map(Summary::from_stored);
        Self { document_id, summary, error: None }
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ask the backend for a fresh summary.
    pub fn generate<A: DocumentApi>(&mut self, api: &A) -> Result<&Summary, ClientError> {
        self.error = None;
        tracing::info!("Generating summary for document {}", self.document_id);

        match api.summarize(self.document_id) {
            Ok(response) => Ok(self.summary.insert(response.into())),
            Err(e) => {
                self.error = Some(e.user_message(FAILURE_MESSAGE));
                Err(e)
            }
        }
    }
}
