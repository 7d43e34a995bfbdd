// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A Document is a backend-side record for one uploaded PDF.
// The client never mutates it; it only re-fetches.
//
// Example payload from GET /documents/:
//   {
//     "id": 7,
//     "title": "lecture-03",
//     "file": "/media/documents/lecture-03.pdf",
//     "extracted_text": "...",
//     "summary": null,
//     "created_at": "2026-03-02T09:14:55.120Z"
//   }
//
// Fields the client does not use (file, extracted_text) are
// simply ignored by serde.
//
// created_at is normally RFC 3339. A timestamp without an offset
// (a naive datetime) is read as UTC so one odd row cannot fail
// the whole listing.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// One uploaded document as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Backend primary key
    pub id: i64,

    /// Display title (the backend derives it from the file name
    /// when none is supplied at upload time)
    pub title: String,

    /// When the backend created the record
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,

    /// Short summary text, present once a summary has been generated
    #[serde(default)]
    pub summary: Option<String>,
}

impl Document {
    /// True when the backend already holds a non-empty summary.
    /// Drives the "Summarized" badge in the list view.
    pub fn is_summarized(&self) -> bool {
        self.summary
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }

    /// Creation date rendered as YYYY-MM-DD
    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Parse a backend timestamp, with or without a UTC offset.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Find a document by id in a fetched listing.
pub fn find_by_id(documents: &[Document], id: i64) -> Option<&Document> {
    documents.iter().find(|d| d.id == id)
}

/// Response body of POST /documents/{id}/summarize/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub short_summary: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

/// A summary as shown in the Summary view: short text plus
/// an ordered list of key points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub short:   String,
    pub bullets: Vec<String>,
}

impl Summary {
    /// Seed a summary from the text stored on the document.
    /// Stored summaries carry no bullet points.
    pub fn from_stored(text: impl Into<String>) -> Self {
        Self { short: text.into(), bullets: Vec::new() }
    }
}

impl From<SummaryResponse> for Summary {
    fn from(r: SummaryResponse) -> Self {
        Self { short: r.short_summary, bullets: r.bullet_points }
    }
}

/// Response body of POST /documents/upload/.
///
/// The backend echoes the whole created document, but the
/// client only relies on the identifier being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,
}
