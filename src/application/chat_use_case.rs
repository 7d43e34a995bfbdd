// ============================================================
// Layer 2 — Chat Use Case
// ============================================================
// One send() is one turn:
//
//   input ──trim──► blank? ──yes──► Ignored (nothing appended,
//                     │                      nothing sent)
//                     no
//                     ▼
//   append user message ──► POST chat ──ok──► append answer
//                                     └─err─► append error message
//
// Failures never escape as Err: they become assistant messages
// flagged as errors, so the conversation can simply continue.

use crate::domain::chat::{normalise_question, ChatHistory, ChatMessage};
use crate::domain::traits::DocumentApi;

/// Shown when a chat turn fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Sorry, I encountered an error communicating with the server.";

/// What happened to one send() call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; history and backend untouched
    Ignored,
    /// The assistant answered
    Answered,
    /// The request failed; an error message was appended
    Failed,
}

#[derive(Debug)]
pub struct ChatUseCase {
    document_id: i64,
    history:     ChatHistory,
}

impl ChatUseCase {
    pub fn new(document_id: i64) -> Self {
        Self { document_id, history: ChatHistory::new() }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn send<A: DocumentApi>(&mut self, api: &A, input: &str) -> SendOutcome {
        let Some(question) = normalise_question(input) else {
            return SendOutcome::Ignored;
        };

        self.history.push(ChatMessage::user(question));
        tracing::debug!("Asking document {}: {}", self.document_id, question);

        match api.chat(self.document_id, question) {
            Ok(response) => {
                self.history.push(ChatMessage::assistant(response.answer));
                SendOutcome::Answered
            }
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                self.history.push(ChatMessage::assistant_error(e.user_message(FAILURE_MESSAGE)));
                SendOutcome::Failed
            }
        }
    }
}
