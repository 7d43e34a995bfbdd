// ============================================================
// Layer 3 — Client Error Taxonomy
// ============================================================
// Every failure the client can hit falls into one of:
//
//   Validation — caught locally, no request was sent
//                (wrong file type, incomplete quiz, blank input)
//   Backend    — the service answered with a non-2xx status
//   Transport  — the request never produced a response
//   Decode     — a 2xx response whose body did not match
//   NotFound   — no document with the requested id
//
// Display rule for users (see `user_message`):
//   - a backend `error` field is shown verbatim
//   - validation and not-found messages are shown verbatim
//   - anything else falls back to the view's generic message

use thiserror::Error;

/// Shown on the detail view when the id has no matching record
pub const NOT_FOUND_MESSAGE: &str = "Document not found.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("backend returned HTTP {status}{}", detail_suffix(.message))]
    Backend {
        status:  u16,
        /// The `error` field of the JSON body, when there was one
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("document {0} not found")]
    NotFound(i64),
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ClientError {
    /// The text a view shows for this error.
    /// `fallback` is the view's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Backend { message: Some(msg), .. } => msg.clone(),
            ClientError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            ClientError::Backend { message: None, .. }
            | ClientError::Transport(_)
            | ClientError::Decode(_) => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
