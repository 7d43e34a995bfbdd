// ============================================================
// Layer 2 — Quiz Use Case
// ============================================================
// Owns the Quiz tab: the current QuizSession plus the last
// error message. Each (re)generation starts from a clean slate:
// selections and the submitted flag are cleared before the
// request goes out, and the question set is replaced when the
// backend answers.

use crate::domain::error::ClientError;
use crate::domain::quiz::{QuizScore, QuizSession};
use crate::domain::traits::DocumentApi;

/// Shown when quiz generation fails without a backend error message
pub const FAILURE_MESSAGE: &str = "Failed to generate quiz.";

#[derive(Debug)]
pub struct QuizUseCase {
    document_id: i64,
    session:     QuizSession,
    error:       Option<String>,
}

impl QuizUseCase {
    pub fn new(document_id: i64) -> Self {
        Self { document_id, session: QuizSession::default(), error: None }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Request a new question set. Returns the number of questions.
    pub fn generate<A: DocumentApi>(&mut self, api: &A) -> Result<usize, ClientError> {
        self.error = None;
        self.session.restart();
        tracing::info!("Generating quiz for document {}", self.document_id);

        match api.generate_quiz(self.document_id) {
            Ok(questions) => {
                let n = questions.len();
                self.session.reset(questions);
                tracing::info!("Received {} quiz questions", n);
                Ok(n)
            }
            Err(e) => {
                self.error = Some(e.user_message(FAILURE_MESSAGE));
                Err(e)
            }
        }
    }

    /// Select option `key` for question `index`.
    /// Returns false when ignored because the quiz is already submitted.
    pub fn select(&mut self, index: usize, key: &str) -> Result<bool, ClientError> {
        let result = self.session.select(index, key);
        if let Err(ref e) = result {
            self.error = Some(e.user_message(FAILURE_MESSAGE));
        }
        result
    }

    /// Submit the selections; rejected while any question is unanswered.
    pub fn submit(&mut self) -> Result<QuizScore, ClientError> {
        match self.session.submit() {
            Ok(score) => {
                self.error = None;
                tracing::info!("Quiz submitted: {}/{}", score.correct, score.total);
                Ok(score)
            }
            Err(e) => {
                self.error = Some(e.user_message(FAILURE_MESSAGE));
                Err(e)
            }
        }
    }
}
