// ============================================================
// Layer 3 — Chat Domain Types
// ============================================================
// A chat is a per-document question/answer exchange. Every turn
// is independent on the backend side; the history below exists
// only so the user can scroll back within one session.

use serde::{Deserialize, Serialize};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the chat history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role:     Role,
    pub content:  String,
    /// Set on assistant messages that report a failed request
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), is_error: false }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), is_error: false }
    }

    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), is_error: true }
    }
}

/// Request body of POST /documents/{id}/chat/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Response body of POST /documents/{id}/chat/.
/// The backend also echoes the question and a timestamp; only
/// the answer is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// In-memory, append-only chat history (until cleared).
#[derive(Debug, Default)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Normalise raw chat input.
/// Returns `None` for empty or whitespace-only input, which must
/// never reach the history or the backend.
pub fn normalise_question(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(normalise_question(""), None);
        assert_eq!(normalise_question("   \t\n"), None);
        assert_eq!(normalise_question("  what is it?  "), Some("what is it?"));
    }

    #[test]
    fn test_history_push_and_clear() {
        let mut h = ChatHistory::new();
        h.push(ChatMessage::user("hi"));
        h.push(ChatMessage::assistant_error("boom"));
        assert_eq!(h.messages().len(), 2);
        assert!(h.last().unwrap().is_error);
        assert_eq!(h.last().unwrap().role, Role::Assistant);

        h.clear();
        assert!(h.messages().is_empty());
    }

    #[test]
    fn test_response_ignores_echoed_fields() {
        let json = r#"{"id": 4, "document": 1, "question": "q", "answer": "a",
                       "created_at": "2026-01-01T00:00:00Z"}"#;
        let r: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.answer, "a");
    }
}
