// ============================================================
// Layer 2 — Upload Use Case
// ============================================================
// Flow:
//   1. Validate the file locally (must be application/pdf)
//        └─ fails → validation error, NO request is sent
//   2. POST it as multipart field "file" (+ optional "title")
//   3. Receipt has an id  → navigate to that document's detail
//      Receipt has no id  → back to the document list

use std::path::PathBuf;

use crate::domain::error::ClientError;
use crate::domain::navigation::Route;
use crate::domain::traits::DocumentApi;
use crate::infra::pdf_file::load_pdf;

/// Shown when the upload fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Failed to upload document. Please try again.";

/// What the user asked to upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub path:  PathBuf,
    pub title: Option<String>,
}

pub struct UploadUseCase<'a, A: DocumentApi> {
    api: &'a A,
}

impl<'a, A: DocumentApi> UploadUseCase<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Validate and upload the file, returning the view to show next.
    pub fn execute(&self, request: &UploadRequest) -> Result<Route, ClientError> {
        let upload = load_pdf(&request.path, request.title.clone())?;

        tracing::info!("Uploading '{}'", upload.file_name);
        let receipt = self.api.upload_document(&upload)?;

        match receipt.id {
            Some(id) => {
                tracing::info!("Upload created document {}", id);
                Ok(Route::DocumentDetail(id))
            }
            None => {
                tracing::warn!("Upload succeeded but the response carried no id");
                Ok(Route::DocumentList)
            }
        }
    }
}
