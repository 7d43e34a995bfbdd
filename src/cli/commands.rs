// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per view of the client:
//
//   list       → document list
//   upload     → upload form, then the new document's detail
//   show       → document detail header
//   summarize  → Summary tab, one shot
//   quiz       → Quiz tab, interactive
//   chat       → Chat tab, one shot or interactive
//   open       → full detail view with tab selector

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::upload_use_case::UploadRequest;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List uploaded documents, newest first
    List,

    /// Upload a PDF and open its detail view
    Upload(UploadArgs),

    /// Show a document's details and stored summary
    Show(DocumentArgs),

    /// Generate a summary of a document
    Summarize(DocumentArgs),

    /// Take a multiple-choice quiz generated from a document
    Quiz(DocumentArgs),

    /// Ask questions about a document
    Chat(ChatArgs),

    /// Open a document with summary, quiz and chat tabs
    Open(DocumentArgs),
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to the PDF file
    pub file: PathBuf,

    /// Title to store instead of the file name
    #[arg(long)]
    pub title: Option<String>,
}

/// The application layer never sees clap types
impl From<UploadArgs> for UploadRequest {
    fn from(a: UploadArgs) -> Self {
        UploadRequest { path: a.file, title: a.title }
    }
}

#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Document id, as shown by `list`
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Document id, as shown by `list`
    pub id: i64,

    /// Ask a single question and exit instead of starting a chat
    #[arg(long, short)]
    pub question: Option<String>,
}
