// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the backend only through the
// DocumentApi trait. That keeps every use case testable with an
// in-memory fake and keeps reqwest out of Layers 2 and 3.
//
// Implementations:
//   - HttpDocumentApi (infra::api_client) → the real REST service
//   - FakeApi (application::testing)      → unit tests

use crate::domain::chat::ChatResponse;
use crate::domain::document::{Document, SummaryResponse, UploadReceipt};
use crate::domain::error::ClientError;
use crate::domain::quiz::QuizQuestion;

/// A PDF that passed client-side validation and is ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfUpload {
    /// File name sent in the multipart part, e.g. "lecture-03.pdf"
    pub file_name: String,

    /// Raw file contents
    pub bytes: Vec<u8>,

    /// Optional title; the backend derives one from the file name otherwise
    pub title: Option<String>,
}

// ─── DocumentApi ──────────────────────────────────────────────────────────────
/// The five operations of the SmartNote REST service.
///
/// Every method maps to exactly one HTTP request. Implementations
/// must turn non-2xx responses into `ClientError::Backend` carrying
/// the body's `error` field when present.
pub trait DocumentApi {
    /// GET /documents/
    fn list_documents(&self) -> Result<Vec<Document>, ClientError>;

    /// POST /documents/upload/ (multipart, field `file`)
    fn upload_document(&self, upload: &PdfUpload) -> Result<UploadReceipt, ClientError>;

    /// POST /documents/{id}/summarize/
    fn summarize(&self, document_id: i64) -> Result<SummaryResponse, ClientError>;

    /// POST /documents/{id}/quiz/
    fn generate_quiz(&self, document_id: i64) -> Result<Vec<QuizQuestion>, ClientError>;

    /// POST /documents/{id}/chat/ with body {"question": ...}
    fn chat(&self, document_id: i64, question: &str) -> Result<ChatResponse, ClientError>;
}
