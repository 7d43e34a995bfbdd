// ============================================================
// Layer 6 — PDF File Inspection
// ============================================================
// The backend only accepts PDFs, so the client checks the file
// before building any request. A file that fails the check is
// never sent.
//
// How the MIME type is decided, both must hold:
//   - the file name ends in ".pdf" (any case)
//   - the content starts with the header "%PDF-" (e.g. "%PDF-1.7"),
//     optionally preceded by whitespace
// A .txt that merely mentions "%PDF-" and an extension-less PDF
// are both rejected.

use std::{fs, path::Path};

use crate::domain::error::ClientError;
use crate::domain::traits::PdfUpload;

/// The only MIME type the upload endpoint accepts
pub const PDF_MIME: &str = "application/pdf";

/// Fallback MIME type for anything that is not a PDF
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Shown when the selected file is not a PDF
pub const INVALID_PDF_MESSAGE: &str = "Please select a valid PDF file.";

const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_EXTENSION: &str = "pdf";

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(PDF_EXTENSION))
        .unwrap_or(false)
}

fn has_pdf_header(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(PDF_MAGIC)
}

/// Decide the MIME type of a file from its name and leading bytes.
pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if has_pdf_extension(path) && has_pdf_header(bytes) {
        PDF_MIME
    } else {
        OCTET_STREAM_MIME
    }
}

/// Read `path` and return it as an upload if, and only if, it is a PDF.
///
/// Errors are always `ClientError::Validation`: nothing here talks
/// to the network.
pub fn load_pdf(path: &Path, title: Option<String>) -> Result<PdfUpload, ClientError> {
    if !path.is_file() {
        return Err(ClientError::Validation(format!(
            "Cannot find file '{}'.",
            path.display()
        )));
    }

    let bytes = fs::read(path).map_err(|e| {
        ClientError::Validation(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let mime = detect_mime(path, &bytes);
    if mime != PDF_MIME {
        tracing::warn!(
            "Rejected '{}': detected {} instead of {}",
            path.display(),
            mime,
            PDF_MIME
        );
        return Err(ClientError::Validation(INVALID_PDF_MESSAGE.to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    tracing::debug!("Validated '{}' ({} bytes)", file_name, bytes.len());

    Ok(PdfUpload { file_name, bytes, title })
}
