// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the outside world:
//
//   config.rs     — Resolves the backend base URL from the
//                   --api-url flag / SMARTNOTE_API_URL env var,
//                   an optional JSON config file, or the default
//                   http://localhost:8000/api.
//
//   pdf_file.rs   — Reads a file from disk and decides whether
//                   it is a PDF before anything is uploaded.
//
//   api_client.rs — HttpDocumentApi, the reqwest implementation
//                   of the DocumentApi trait from Layer 3.
//
// The application layer only ever sees the DocumentApi trait,
// so the HTTP client can be swapped for a fake in tests.

/// Client configuration loading
pub mod config;

/// Client-side PDF validation
pub mod pdf_file;

/// REST client for the SmartNote backend
pub mod api_client;
