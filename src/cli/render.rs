// ============================================================
// Layer 1 — Rendering
// ============================================================
// Turns domain values into terminal text. Every function writes
// to any `Write` so the output can be captured in tests.

use std::io::{self, Write};

use crate::domain::chat::{ChatMessage, Role};
use crate::domain::document::{Document, Summary};
use crate::domain::navigation::Tab;
use crate::domain::quiz::{AnswerOutcome, QuizQuestion, QuizScore, QuizSession};

pub fn document_list(out: &mut impl Write, documents: &[Document]) -> io::Result<()> {
    if documents.is_empty() {
        writeln!(out, "No documents yet.")?;
        writeln!(out, "Upload a PDF with `smartnote upload <FILE>` to get started.")?;
        return Ok(());
    }

    for doc in documents {
        let badge = if doc.is_summarized() { "  [Summarized]" } else { "" };
        writeln!(out, "{:>5}  {}  {}{}", doc.id, doc.created_date(), doc.title, badge)?;
    }
    Ok(())
}

pub fn document_header(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    writeln!(out, "{}", doc.title)?;
    writeln!(out, "Document #{} · uploaded {}", doc.id, doc.created_date())?;
    Ok(())
}

pub fn not_found(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")?;
    writeln!(out, "Back to the dashboard: smartnote list")
}

pub fn tabs(out: &mut impl Write, active: Tab) -> io::Result<()> {
    let labels: Vec<String> = Tab::ALL
        .iter()
        .map(|t| if *t == active { format!("[{}]", t.label()) } else { t.label().to_string() })
        .collect();
    writeln!(out, "{}", labels.join("  "))
}

pub fn summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Summary")?;
    writeln!(out, "{}", summary.short)?;

    if !summary.bullets.is_empty() {
        writeln!(out)?;
        writeln!(out, "Key Insights")?;
        for point in &summary.bullets {
            writeln!(out, "  • {point}")?;
        }
    }
    Ok(())
}

/// One question with its options. `selected` marks the user's pick,
/// `outcome` (after submission) marks right and wrong answers.
pub fn quiz_question(
    out:      &mut impl Write,
    index:    usize,
    question: &QuizQuestion,
    selected: Option<&str>,
    outcome:  Option<&AnswerOutcome>,
) -> io::Result<()> {
    writeln!(out, "{}. {}", index + 1, question.question)?;

    for (key, text) in &question.options {
        let marker = match outcome {
            Some(_) if *key == question.correct_answer => "✓",
            Some(AnswerOutcome::Wrong { selected, .. }) if selected == key => "✗",
            None if selected == Some(key.as_str()) => ">",
            _ => " ",
        };
        writeln!(out, "   {marker} {key}) {text}")?;
    }
    Ok(())
}

pub fn quiz_results(out: &mut impl Write, session: &QuizSession, score: QuizScore) -> io::Result<()> {
    writeln!(
        out,
        "You scored {} / {} ({:.0}%)",
        score.correct,
        score.total,
        score.percentage()
    )?;
    writeln!(out)?;

    for (i, q) in session.questions().iter().enumerate() {
        let outcome = session.outcome(i);
        quiz_question(out, i, q, session.selected(i), outcome.as_ref())?;
        match outcome {
            Some(AnswerOutcome::Correct) => writeln!(out, "   Correct")?,
            Some(AnswerOutcome::Wrong { correct, .. }) => {
                writeln!(out, "   Wrong. The correct answer is {correct}.")?
            }
            None => {}
        }
    }
    Ok(())
}

pub fn chat_message(out: &mut impl Write, message: &ChatMessage) -> io::Result<()> {
    let speaker = match (message.role, message.is_error) {
        (Role::User, _)          => "You",
        (Role::Assistant, false) => "Assistant",
        (Role::Assistant, true)  => "Error",
    };
    writeln!(out, "{speaker}: {}", message.content)
}
