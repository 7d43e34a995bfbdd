// In-memory DocumentApi used by the use case and CLI tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::domain::chat::ChatResponse;
use crate::domain::document::{Document, SummaryResponse, UploadReceipt};
use crate::domain::error::ClientError;
use crate::domain::quiz::QuizQuestion;
use crate::domain::traits::{DocumentApi, PdfUpload};

#[derive(Default)]
pub struct FakeApi {
    pub documents: Vec<Document>,
    pub summary:   Option<SummaryResponse>,
    pub quiz:      Vec<QuizQuestion>,
    pub upload_id: Option<i64>,

    /// When set, every call fails with Backend { status, message }
    pub fail_with: Option<(u16, Option<String>)>,

    /// Number of requests that reached the fake
    pub calls:     Cell<usize>,
    pub questions: RefCell<Vec<String>>,
    pub uploads:   RefCell<Vec<PdfUpload>>,
}

impl FakeApi {
    pub fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            fail_with: Some((status, message.map(str::to_string))),
            ..Self::default()
        }
    }

    fn begin(&self) -> Result<(), ClientError> {
        self.calls.set(self.calls.get() + 1);
        match &self.fail_with {
            Some((status, message)) => Err(ClientError::Backend {
                status:  *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DocumentApi for FakeApi {
    fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.begin()?;
        Ok(self.documents.clone())
    }

    fn upload_document(&self, upload: &PdfUpload) -> Result<UploadReceipt, ClientError> {
        self.begin()?;
        self.uploads.borrow_mut().push(upload.clone());
        Ok(UploadReceipt { id: self.upload_id, title: upload.title.clone() })
    }

    fn summarize(&self, _document_id: i64) -> Result<SummaryResponse, ClientError> {
        self.begin()?;
        self.summary
            .clone()
            .ok_or_else(|| ClientError::Decode("no summary configured".into()))
    }

    fn generate_quiz(&self, _document_id: i64) -> Result<Vec<QuizQuestion>, ClientError> {
        self.begin()?;
        Ok(self.quiz.clone())
    }

    fn chat(&self, _document_id: i64, question: &str) -> Result<ChatResponse, ClientError> {
        self.begin()?;
        self.questions.borrow_mut().push(question.to_string());
        Ok(ChatResponse { answer: format!("Answer to: {question}") })
    }
}

pub fn document(id: i64, title: &str, summary: Option<&str>) -> Document {
    Document {
        id,
        title:      title.to_string(),
        created_at: "2026-03-02T09:14:55Z".parse().expect("valid timestamp"),
        summary:    summary.map(str::to_string),
    }
}

pub fn question(text: &str, correct: &str) -> QuizQuestion {
    let options: BTreeMap<String, String> = ["A", "B", "C", "D"]
        .iter()
        .map(|k| (k.to_string(), format!("{text} / {k}")))
        .collect();
    QuizQuestion {
        question:       text.to_string(),
        options,
        correct_answer: correct.to_string(),
    }
}

pub fn summary_response() -> SummaryResponse {
    SummaryResponse {
        short_summary: "A short overview.".to_string(),
        bullet_points: vec!["First point".to_string(), "Second point".to_string()],
    }
}

pub const MINIMAL_PDF: &[u8] = b"%PDF-1.4\n%%EOF\n";
