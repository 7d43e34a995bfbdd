// ============================================================
// Layer 2 — Document Detail Use Case
// ============================================================
// The detail view shows one document and hosts three tabs:
//
//   ┌──────────── DocumentDetail ─────────────┐
//   │  title · created date · summarized?     │
//   │  [Summary]  [Quiz]  [Chat]              │
//   │   SummaryUseCase  QuizUseCase  ChatUseCase
//   └─────────────────────────────────────────┘
//
// There is no single-document endpoint, so the document is found
// by listing everything and matching the id. Each tab keeps its
// own state for as long as the detail view is open; switching
// tabs never resets another tab.

use crate::application::chat_use_case::ChatUseCase;
use crate::application::quiz_use_case::QuizUseCase;
use crate::application::summary_use_case::SummaryUseCase;
use crate::domain::document::{find_by_id, Document};
use crate::domain::error::ClientError;
use crate::domain::navigation::Tab;
use crate::domain::traits::DocumentApi;

/// Shown when the listing fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Failed to load document details.";

/// Look up a single document by id.
pub fn load_document<A: DocumentApi>(api: &A, id: i64) -> Result<Document, ClientError> {
    let documents = api.list_documents()?;
    match find_by_id(&documents, id) {
        Some(doc) => Ok(doc.clone()),
        None => {
            tracing::warn!("Document {} not in listing of {}", id, documents.len());
            Err(ClientError::NotFound(id))
        }
    }
}

/// State of an open detail view.
#[derive(Debug)]
pub struct DocumentDetailSession {
    document: Document,
    active:   Tab,
    summary:  SummaryUseCase,
    quiz:     QuizUseCase,
    chat:     ChatUseCase,
}

impl DocumentDetailSession {
    /// Fetch the document and open the view on the Summary tab.
    pub fn open<A: DocumentApi>(api: &A, id: i64) -> Result<Self, ClientError> {
        let document = load_document(api, id)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        let id = document.id;
        Self {
            summary:  SummaryUseCase::new(id, document.summary.as_deref()),
            quiz:     QuizUseCase::new(id),
            chat:     ChatUseCase::new(id),
            active:   Tab::default(),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn switch_to(&mut self, tab: Tab) {
        if tab != self.active {
            tracing::debug!("Switching detail tab {} -> {}", self.active, tab);
        }
        self.active = tab;
    }

    pub fn summary_mut(&mut self) -> &mut SummaryUseCase {
        &mut self.summary
    }

    pub fn quiz_mut(&mut self) -> &mut QuizUseCase {
        &mut self.quiz
    }

    pub fn chat_mut(&mut self) -> &mut ChatUseCase {
        &mut self.chat
    }
}
