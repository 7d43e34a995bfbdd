// ============================================================
// Layer 3 — Quiz Domain Types
// ============================================================
// A quiz is an ordered list of multiple-choice questions with
// exactly one correct option each. The backend generates a new
// set on every request; the client only keeps the current set
// together with the user's selections.
//
// Session lifecycle:
//
//   reset(questions) ──► answering ──submit()──► submitted
//        ▲                   │  select(i, key)        │
//        └───────────────────┴────────────────────────┘
//                      (regenerate)
//
//   - select() after submission is ignored
//   - submit() with unanswered questions is rejected and
//     never computes a score
//   - score = #questions whose selected key == correct key

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::ClientError;

/// Shown when the user submits before answering every question
pub const INCOMPLETE_QUIZ_MESSAGE: &str = "Please answer all questions before submitting.";

/// One multiple-choice question as returned by POST /documents/{id}/quiz/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,

    /// Option key → option text, e.g. {"A": "Paris", "B": "Rome"}.
    /// A BTreeMap keeps the options in key order for display.
    pub options: BTreeMap<String, String>,

    /// Key of the correct option, e.g. "A"
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Resolve user input to one of this question's option keys.
    /// Matching is case-insensitive and ignores surrounding whitespace,
    /// so "b " selects option "B".
    pub fn resolve_key(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        self.options
            .keys()
            .find(|k| k.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }
}

/// Result of a submitted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total:   usize,
}

impl QuizScore {
    /// Score as a percentage in [0, 100]. An empty quiz scores 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

/// How a single question was answered, available after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { selected: String, correct: String },
}

/// The quiz view's local state: the current question set,
/// the selection per question and whether it was submitted.
#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    /// question index → selected option key
    selected:  BTreeMap<usize, String>,
    submitted: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions, selected: BTreeMap::new(), submitted: false }
    }

    /// Replace the question set (generate / regenerate).
    /// Clears all selections and the submitted flag.
    pub fn reset(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
        self.selected.clear();
        self.submitted = false;
    }

    /// Keep the questions but forget every selection and the submission
    pub fn restart(&mut self) {
        self.selected.clear();
        self.submitted = false;
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Record a selection for question `index`.
    ///
    /// Returns `Ok(false)` when the quiz is already submitted and the
    /// selection was ignored, `Ok(true)` when it was recorded.
    pub fn select(&mut self, index: usize, input: &str) -> Result<bool, ClientError> {
        if self.submitted {
            return Ok(false);
        }

        let question = self.questions.get(index).ok_or_else(|| {
            ClientError::Validation(format!("There is no question {}.", index + 1))
        })?;

        let key = question.resolve_key(input).ok_or_else(|| {
            ClientError::Validation(format!(
                "Option '{}' is not offered for question {}.",
                input.trim(),
                index + 1
            ))
        })?;

        self.selected.insert(index, key.to_string());
        Ok(true)
    }

    /// The key currently selected for question `index`, if any
    pub fn selected(&self, index: usize) -> Option<&str> {
        self.selected.get(&index).map(String::as_str)
    }

    /// Indices of questions that have no selection yet
    pub fn unanswered(&self) -> Vec<usize> {
        (0..self.questions.len())
            .filter(|i| !self.selected.contains_key(i))
            .collect()
    }

    /// Submit the answers.
    ///
    /// Fails with a validation error (and leaves the session
    /// unsubmitted) if any question is still unanswered.
    pub fn submit(&mut self) -> Result<QuizScore, ClientError> {
        if self.questions.is_empty() {
            return Err(ClientError::Validation(
                "There are no questions to submit. Generate a quiz first.".to_string(),
            ));
        }
        if !self.unanswered().is_empty() {
            return Err(ClientError::Validation(INCOMPLETE_QUIZ_MESSAGE.to_string()));
        }

        self.submitted = true;
        Ok(self.compute_score())
    }

    /// The score, only once the quiz has been submitted
    pub fn score(&self) -> Option<QuizScore> {
        self.submitted.then(|| self.compute_score())
    }

    /// Per-question outcome, only once the quiz has been submitted
    pub fn outcome(&self, index: usize) -> Option<AnswerOutcome> {
        if !self.submitted {
            return None;
        }
        let q        = self.questions.get(index)?;
        let selected = self.selected.get(&index)?;
        if *selected == q.correct_answer {
            Some(AnswerOutcome::Correct)
        } else {
            Some(AnswerOutcome::Wrong {
                selected: selected.clone(),
                correct:  q.correct_answer.clone(),
            })
        }
    }

    fn compute_score(&self) -> QuizScore {
        let correct = self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selected.get(i) == Some(&q.correct_answer))
            .count();
        QuizScore { correct, total: self.questions.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: &str) -> QuizQuestion {
        let options = ["A", "B", "C", "D"]
            .iter()
            .map(|k| (k.to_string(), format!("{text} option {k}")))
            .collect();
        QuizQuestion {
            question:       text.to_string(),
            options,
            correct_answer: correct.to_string(),
        }
    }

    fn three_questions() -> QuizSession {
        QuizSession::new(vec![
            question("q1", "A"),
            question("q2", "C"),
            question("q3", "D"),
        ])
    }

    #[test]
    fn test_parses_backend_question() {
        let json = r#"{
            "id": 12, "document": 3,
            "question": "What is 2+2?",
            "options": {"B": "5", "A": "4", "C": "3", "D": "22"},
            "correct_answer": "A"
        }"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = q.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["A", "B", "C", "D"]);
        assert_eq!(q.correct_answer, "A");
    }

    #[test]
    fn test_submit_incomplete_is_rejected_without_score() {
        let mut s = three_questions();
        s.select(0, "A").unwrap();
        s.select(2, "D").unwrap();

        let err = s.submit().unwrap_err();
        assert_eq!(err.user_message("fallback"), INCOMPLETE_QUIZ_MESSAGE);
        assert!(!s.is_submitted());
        assert!(s.score().is_none());
        assert_eq!(s.unanswered(), vec![1]);
    }

    #[test]
    fn test_score_counts_matching_keys() {
        let mut s = three_questions();
        s.select(0, "A").unwrap(); // correct
        s.select(1, "B").unwrap(); // wrong
        s.select(2, "d").unwrap(); // correct, case-insensitive

        let score = s.submit().unwrap();
        assert_eq!(score, QuizScore { correct: 2, total: 3 });
        assert_eq!(s.score(), Some(score));
        assert_eq!(s.outcome(0), Some(AnswerOutcome::Correct));
        assert_eq!(
            s.outcome(1),
            Some(AnswerOutcome::Wrong { selected: "B".into(), correct: "C".into() })
        );
    }

    #[test]
    fn test_score_stays_within_bounds() {
        for picks in [["A", "A", "A"], ["B", "B", "B"], ["A", "C", "D"]] {
            let mut s = three_questions();
            for (i, p) in picks.iter().enumerate() {
                s.select(i, p).unwrap();
            }
            let score = s.submit().unwrap();
            assert!(score.correct <= score.total);
            assert!((0.0..=100.0).contains(&score.percentage()));
        }
    }

    #[test]
    fn test_select_after_submit_is_ignored() {
        let mut s = QuizSession::new(vec![question("q1", "A")]);
        s.select(0, "A").unwrap();
        s.submit().unwrap();

        assert!(!s.select(0, "B").unwrap());
        assert_eq!(s.selected(0), Some("A"));
    }

    #[test]
    fn test_reselect_overwrites_previous_choice() {
        let mut s = QuizSession::new(vec![question("q1", "A")]);
        s.select(0, "B").unwrap();
        s.select(0, "A").unwrap();
        assert_eq!(s.selected(0), Some("A"));
    }

    #[test]
    fn test_unknown_key_and_index_are_validation_errors() {
        let mut s = three_questions();
        assert!(matches!(s.select(0, "E"), Err(ClientError::Validation(_))));
        assert!(matches!(s.select(9, "A"), Err(ClientError::Validation(_))));
        assert_eq!(s.selected(0), None);
    }

    #[test]
    fn test_reset_clears_selection_and_submission() {
        let mut s = QuizSession::new(vec![question("q1", "A")]);
        s.select(0, "A").unwrap();
        s.submit().unwrap();

        s.reset(vec![question("n1", "B"), question("n2", "C")]);
        assert!(!s.is_submitted());
        assert_eq!(s.unanswered(), vec![0, 1]);
    }

    #[test]
    fn test_empty_quiz_cannot_be_submitted() {
        let mut s = QuizSession::default();
        assert!(s.submit().is_err());
        assert_eq!(QuizScore { correct: 0, total: 0 }.percentage(), 0.0);
    }
}
