// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per view of the client. Each use case owns the
// local state of its view and talks to the backend only through
// the DocumentApi trait:
//
//   document_list_use_case — fetch the document listing
//   detail_use_case        — look one document up, host the tabs
//   upload_use_case        — validate a PDF, upload it, navigate
//   summary_use_case       — generate / hold a summary
//   quiz_use_case          — generate a quiz, answer, score
//   chat_use_case          — ask questions, keep the history
//
// Rules for this layer:
//   - No printing or prompting (that's Layer 1)
//   - No reqwest types (that's Layer 6)
//   - Errors stay scoped to the view that raised them

/// Document listing
pub mod document_list_use_case;

/// Document detail view and its tabs
pub mod detail_use_case;

/// PDF upload
pub mod upload_use_case;

/// Summary generation
pub mod summary_use_case;

/// Quiz generation and scoring
pub mod quiz_use_case;

/// Chat with a document
pub mod chat_use_case;

#[cfg(test)]
pub mod testing;
