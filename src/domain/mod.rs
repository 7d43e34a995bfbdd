// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// SmartNote client works with:
//
//   document.rs   — Document, Summary and the upload receipt
//   quiz.rs       — quiz questions and the answer/score session
//   chat.rs       — chat messages and the in-memory history
//   navigation.rs — which view to show next, detail-view tabs
//   error.rs      — the client error taxonomy
//   traits.rs     — DocumentApi, the seam to the backend
//
// Rules for this layer:
//   - NO reqwest types allowed here
//   - NO terminal I/O or printing
//   - Only plain structs, enums and traits
//
// Everything in here is view-local state: it mirrors the last
// successful backend response and is dropped when the command ends.

/// Documents, summaries and upload receipts
pub mod document;

/// Quiz questions and the quiz answering session
pub mod quiz;

/// Chat messages and chat history
pub mod chat;

/// Routes between views and detail-view tabs
pub mod navigation;

/// ClientError and the user-facing message rule
pub mod error;

/// Core abstractions (traits) implemented by other layers
pub mod traits;
