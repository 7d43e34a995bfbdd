// ============================================================
// Layer 6 — SmartNote REST Client
// ============================================================
// Translates the five DocumentApi operations into HTTP calls:
//
//   list_documents   GET  {base}/documents/
//   upload_document  POST {base}/documents/upload/       (multipart)
//   summarize        POST {base}/documents/{id}/summarize/
//   generate_quiz    POST {base}/documents/{id}/quiz/
//   chat             POST {base}/documents/{id}/chat/    {"question"}
//
// Response handling is the same for every call:
//   2xx     → decode the body into the expected type
//   non-2xx → ClientError::Backend with the body's "error" field
//             when the body is JSON and has one
//
// The client is blocking. No request timeout is applied: summary
// and quiz generation can take a long time on the backend and the
// user waits for them.

use serde::de::DeserializeOwned;
use std::time::Duration;

use reqwest::blocking::{multipart, Client, Response};

use crate::domain::chat::{ChatRequest, ChatResponse};
use crate::domain::document::{Document, SummaryResponse, UploadReceipt};
use crate::domain::error::ClientError;
use crate::domain::quiz::QuizQuestion;
use crate::domain::traits::{DocumentApi, PdfUpload};
use crate::infra::config::ClientConfig;
use crate::infra::pdf_file::PDF_MIME;

/// reqwest-backed implementation of DocumentApi.
#[derive(Debug, Clone)]
pub struct HttpDocumentApi {
    client:   Client,
    /// Base URL without trailing slash, e.g. "http://localhost:8000/api"
    base_url: String,
}

impl HttpDocumentApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join an endpoint path onto the base URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn document_endpoint(&self, document_id: i64, action: &str) -> String {
        self.endpoint(&format!("documents/{document_id}/{action}/"))
    }
}

impl DocumentApi for HttpDocumentApi {
    fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        let url = self.endpoint("documents/");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        decode(response)
    }

    fn upload_document(&self, upload: &PdfUpload) -> Result<UploadReceipt, ClientError> {
        let url = self.endpoint("documents/upload/");
        tracing::debug!("POST {} ({}, {} bytes)", url, upload.file_name, upload.bytes.len());

        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(PDF_MIME)?;

        let mut form = multipart::Form::new().part("file", part);
        if let Some(ref title) = upload.title {
            form = form.text("title", title.clone());
        }

        let response = self.client.post(&url).multipart(form).send()?;
        decode(response)
    }

    fn summarize(&self, document_id: i64) -> Result<SummaryResponse, ClientError> {
        let url = self.document_endpoint(document_id, "summarize");
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).send()?;
        decode(response)
    }

    fn generate_quiz(&self, document_id: i64) -> Result<Vec<QuizQuestion>, ClientError> {
        let url = self.document_endpoint(document_id, "quiz");
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).send()?;
        decode(response)
    }

    fn chat(&self, document_id: i64, question: &str) -> Result<ChatResponse, ClientError> {
        let url = self.document_endpoint(document_id, "chat");
        tracing::debug!("POST {}", url);

        let body = ChatRequest { question: question.to_string() };
        let response = self.client.post(&url).json(&body).send()?;
        decode(response)
    }
}

/// Turn a response into `T`, or into a ClientError for non-2xx statuses.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body   = response.text()?;

    if !status.is_success() {
        let message = error_field(&body);
        tracing::warn!(
            "Backend returned {} ({})",
            status,
            message.as_deref().unwrap_or("no error field")
        );
        return Err(ClientError::Backend { status: status.as_u16(), message });
    }

    tracing::debug!("Backend returned {} ({} bytes)", status, body.len());
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Extract the string `error` field from a JSON error body.
/// Non-JSON bodies (HTML error pages, empty bodies) yield None.
fn error_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
