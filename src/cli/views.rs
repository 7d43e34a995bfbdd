// ============================================================
// Layer 1 — Views
// ============================================================
// One function per view. Each builds its use case, shows a
// progress line while a request blocks, and renders the result.
//
// Error policy:
//   - one-shot commands (list, show, upload, summarize, one-shot
//     chat) return the view's user-facing message as the error,
//     so the process exits non-zero with exactly that text
//   - interactive views (quiz, chat, open) print the message and
//     let the user retry; nothing is retried automatically

use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

use crate::application::chat_use_case::{ChatUseCase, SendOutcome};
use crate::application::detail_use_case::{self, load_document, DocumentDetailSession};
use crate::application::document_list_use_case::{self, DocumentListUseCase};
use crate::application::quiz_use_case::QuizUseCase;
use crate::application::summary_use_case::{self, SummaryUseCase};
use crate::application::upload_use_case::{self, UploadRequest, UploadUseCase};
use crate::cli::render;
use crate::cli::terminal::Terminal;
use crate::domain::chat::normalise_question;
use crate::domain::error::{ClientError, NOT_FOUND_MESSAGE};
use crate::domain::navigation::{Route, Tab};
use crate::domain::traits::DocumentApi;

const QUIT: &str = "/quit";
const CLEAR: &str = "/clear";

/// Reduce a ClientError to the text its view shows
fn view_error(e: ClientError, fallback: &str) -> anyhow::Error {
    anyhow!(e.user_message(fallback))
}

// ─── Document list ────────────────────────────────────────────────────────────

pub fn list<A: DocumentApi, R: BufRead, W: Write>(api: &A, term: &mut Terminal<R, W>) -> Result<()> {
    let documents = DocumentListUseCase::new(api)
        .execute()
        .map_err(|e| view_error(e, document_list_use_case::FAILURE_MESSAGE))?;

    render::document_list(term.out(), &documents)?;
    Ok(())
}

// ─── Upload ───────────────────────────────────────────────────────────────────

pub fn upload<A: DocumentApi, R: BufRead, W: Write>(
    api:     &A,
    term:    &mut Terminal<R, W>,
    request: &UploadRequest,
) -> Result<()> {
    term.progress(&format!("Uploading {}...", request.path.display()))?;

    let route = UploadUseCase::new(api)
        .execute(request)
        .map_err(|e| view_error(e, upload_use_case::FAILURE_MESSAGE))?;

    writeln!(term.out(), "Upload successful!")?;
    navigate(api, term, route)
}

fn navigate<A: DocumentApi, R: BufRead, W: Write>(
    api:   &A,
    term:  &mut Terminal<R, W>,
    route: Route,
) -> Result<()> {
    match route {
        Route::DocumentDetail(id) => show(api, term, id),
        Route::DocumentList       => list(api, term),
    }
}

// ─── Document detail ──────────────────────────────────────────────────────────

pub fn show<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    id:   i64,
) -> Result<()> {
    let document = match load_document(api, id) {
        Ok(doc) => doc,
        Err(ClientError::NotFound(_)) => {
            render::not_found(term.out(), NOT_FOUND_MESSAGE)?;
            return Ok(());
        }
        Err(e) => return Err(view_error(e, detail_use_case::FAILURE_MESSAGE)),
    };

    let out = term.out();
    render::document_header(out, &document)?;
    writeln!(out)?;

    match SummaryUseCase::new(document.id, document.summary.as_deref()).summary() {
        Some(summary) => render::summary(out, summary)?,
        None => writeln!(out, "Not summarized yet. Run `smartnote summarize {}`.", document.id)?,
    }
    writeln!(out)?;
    writeln!(out, "Run `smartnote open {}` for the summary, quiz and chat tabs.", document.id)?;
    Ok(())
}

pub fn open<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    id:   i64,
) -> Result<()> {
    let mut session = match DocumentDetailSession::open(api, id) {
        Ok(session) => session,
        Err(ClientError::NotFound(_)) => {
            render::not_found(term.out(), NOT_FOUND_MESSAGE)?;
            return Ok(());
        }
        Err(e) => return Err(view_error(e, detail_use_case::FAILURE_MESSAGE)),
    };

    render::document_header(term.out(), session.document())?;

    loop {
        writeln!(term.out())?;
        render::tabs(term.out(), session.active_tab())?;
        let Some(choice) = term.ask(&format!("Open tab (summary, quiz, chat) or {QUIT}: "))? else {
            return Ok(());
        };
        if choice.trim() == QUIT {
            return Ok(());
        }

        let tab = match choice.parse::<Tab>() {
            Ok(tab) => tab,
            Err(e) => {
                writeln!(term.out(), "{}", e.user_message(""))?;
                continue;
            }
        };

        session.switch_to(tab);
        match tab {
            Tab::Summary => summary_tab(api, term, session.summary_mut())?,
            Tab::Quiz    => run_quiz(api, term, session.quiz_mut())?,
            Tab::Chat    => run_chat(api, term, session.chat_mut())?,
        }
    }
}

// ─── Summary ──────────────────────────────────────────────────────────────────

pub fn summarize<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    id:   i64,
) -> Result<()> {
    let mut uc = SummaryUseCase::new(id, None);
    term.progress("Generating summary...")?;

    let summary = uc
        .generate(api)
        .map_err(|e| view_error(e, summary_use_case::FAILURE_MESSAGE))?;

    render::summary(term.out(), summary)?;
    Ok(())
}

fn summary_tab<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    uc:   &mut SummaryUseCase,
) -> Result<()> {
    let wants_summary = match uc.summary() {
        Some(summary) => {
            render::summary(term.out(), summary)?;
            term.confirm("Regenerate the summary?", false)?
        }
        None => term.confirm("Generate a summary?", true)?,
    };
    if !wants_summary {
        return Ok(());
    }

    term.progress("Generating summary...")?;
    if uc.generate(api).is_err() {
        let message = uc.error().unwrap_or(summary_use_case::FAILURE_MESSAGE);
        writeln!(term.out(), "Error: {message}")?;
    } else if let Some(summary) = uc.summary() {
        render::summary(term.out(), summary)?;
    }
    Ok(())
}

// ─── Quiz ─────────────────────────────────────────────────────────────────────

pub fn quiz<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    id:   i64,
) -> Result<()> {
    let mut uc = QuizUseCase::new(id);
    run_quiz(api, term, &mut uc)
}

/// Quiz loop: generate, answer, score, optionally try another set.
/// Re-entering with an unfinished quiz continues where it stopped.
fn run_quiz<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    uc:   &mut QuizUseCase,
) -> Result<()> {
    if uc.session().is_empty() && !generate_quiz(api, term, uc)? {
        return Ok(());
    }

    loop {
        if !uc.session().is_submitted() && !answer_questions(term, uc)? {
            return Ok(());
        }

        if let Some(score) = uc.session().score() {
            writeln!(term.out())?;
            render::quiz_results(term.out(), uc.session(), score)?;
        }

        if !term.confirm("Try another set?", false)? || !generate_quiz(api, term, uc)? {
            return Ok(());
        }
    }
}

/// Returns false when the user gave up after a failed generation.
fn generate_quiz<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    uc:   &mut QuizUseCase,
) -> Result<bool> {
    loop {
        term.progress("Generating quiz...")?;
        match uc.generate(api) {
            Ok(0) => writeln!(term.out(), "No questions were generated for this document.")?,
            Ok(_) => return Ok(true),
            Err(_) => {
                let message = uc.error().unwrap_or_default().to_string();
                writeln!(term.out(), "Error: {message}")?;
            }
        }
        if !term.confirm("Try again?", false)? {
            return Ok(false);
        }
    }
}

/// Ask every unanswered question, then submit. Skipped questions
/// block submission and are asked again. Returns false on quit.
fn answer_questions<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    uc:   &mut QuizUseCase,
) -> Result<bool> {
    let mut pending = uc.session().unanswered();

    loop {
        for index in pending {
            let question = uc.session().questions()[index].clone();
            writeln!(term.out())?;
            render::quiz_question(term.out(), index, &question, uc.session().selected(index), None)?;

            let keys: Vec<&str> = question.options.keys().map(String::as_str).collect();
            let prompt = format!("Answer ({}), Enter to skip, {QUIT} to stop: ", keys.join("/"));

            loop {
                let Some(input) = term.ask(&prompt)? else {
                    return Ok(false);
                };
                let input = input.trim();
                if input == QUIT {
                    return Ok(false);
                }
                if input.is_empty() {
                    break;
                }
                match uc.select(index, input) {
                    Ok(_)  => break,
                    Err(e) => writeln!(term.out(), "{}", e.user_message(""))?,
                }
            }
        }

        match uc.submit() {
            Ok(_) => return Ok(true),
            Err(_) => {
                let message = uc.error().unwrap_or_default().to_string();
                writeln!(term.out(), "{message}")?;
                pending = uc.session().unanswered();
            }
        }
    }
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

pub fn chat<A: DocumentApi, R: BufRead, W: Write>(
    api:      &A,
    term:     &mut Terminal<R, W>,
    id:       i64,
    question: Option<&str>,
) -> Result<()> {
    let mut uc = ChatUseCase::new(id);

    let Some(question) = question else {
        return run_chat(api, term, &mut uc);
    };

    match uc.send(api, question) {
        SendOutcome::Ignored => Err(anyhow!("Nothing to send: the question is empty.")),
        SendOutcome::Answered => {
            if let Some(answer) = uc.history().last() {
                writeln!(term.out(), "{}", answer.content)?;
            }
            Ok(())
        }
        SendOutcome::Failed => {
            let message = uc.history().last().map(|m| m.content.clone()).unwrap_or_default();
            Err(anyhow!(message))
        }
    }
}

fn run_chat<A: DocumentApi, R: BufRead, W: Write>(
    api:  &A,
    term: &mut Terminal<R, W>,
    uc:   &mut ChatUseCase,
) -> Result<()> {
    writeln!(
        term.out(),
        "Ask a question about the PDF. {CLEAR} clears the chat, {QUIT} leaves."
    )?;
    for message in uc.history().messages() {
        render::chat_message(term.out(), message)?;
    }

    loop {
        let Some(line) = term.ask("> ")? else {
            return Ok(());
        };

        match line.trim() {
            QUIT => return Ok(()),
            CLEAR => {
                uc.clear();
                writeln!(term.out(), "Chat cleared.")?;
                continue;
            }
            _ => {}
        }

        if normalise_question(&line).is_none() {
            continue;
        }

        term.progress("Thinking...")?;
        if uc.send(api, &line) != SendOutcome::Ignored {
            if let Some(reply) = uc.history().last() {
                render::chat_message(term.out(), reply)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{document, question, summary_response, FakeApi, MINIMAL_PDF};
    use std::io::Cursor;

    type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

    fn term(input: &str) -> TestTerminal {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(t: &mut TestTerminal) -> String {
        String::from_utf8(t.out().clone()).unwrap()
    }

    fn quiz_api() -> FakeApi {
        FakeApi {
            quiz: vec![question("q1", "A"), question("q2", "B")],
            ..FakeApi::default()
        }
    }

    #[test]
    fn test_list_failure_returns_backend_text() {
        let api = FakeApi::failing(500, Some("Database unavailable"));
        let err = list(&api, &mut term("")).unwrap_err();
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn test_show_unknown_document_renders_not_found() {
        let api = FakeApi { documents: vec![document(1, "one", None)], ..FakeApi::default() };
        let mut t = term("");
        show(&api, &mut t, 5).unwrap();
        let text = output(&mut t);
        assert!(text.contains(NOT_FOUND_MESSAGE));
        assert!(text.contains("smartnote list"));
    }

    #[test]
    fn test_show_failure_returns_backend_text() {
        let api = FakeApi::failing(500, Some("Database unavailable"));
        let err = show(&api, &mut term(""), 1).unwrap_err();
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn test_open_failure_without_error_field_uses_detail_message() {
        let api = FakeApi::failing(502, None);
        let err = open(&api, &mut term(""), 1).unwrap_err();
        assert_eq!(err.to_string(), detail_use_case::FAILURE_MESSAGE);
    }

    #[test]
    fn test_upload_navigates_to_new_document() {
        let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        f.write_all(MINIMAL_PDF).unwrap();

        let api = FakeApi {
            upload_id: Some(3),
            documents: vec![document(3, "Fresh upload", None)],
            ..FakeApi::default()
        };
        let request = UploadRequest { path: f.path().to_path_buf(), title: None };

        let mut t = term("");
        upload(&api, &mut t, &request).unwrap();
        let text = output(&mut t);
        assert!(text.contains("Upload successful!"));
        assert!(text.contains("Fresh upload"));
        assert!(text.contains("Document #3"));
    }

    #[test]
    fn test_summarize_prints_bullets() {
        let api = FakeApi { summary: Some(summary_response()), ..FakeApi::default() };
        let mut t = term("");
        summarize(&api, &mut t, 1).unwrap();
        let text = output(&mut t);
        assert!(text.contains("A short overview."));
        assert!(text.contains("• Second point"));
    }

    #[test]
    fn test_quiz_flow_with_skip_and_bad_key() {
        // q1: skip, q2: bad key then B; resubmit asks q1 again: A; decline another set
        let mut t = term("\nZ\nb\nA\nn\n");
        quiz(&quiz_api(), &mut t, 1).unwrap();

        let text = output(&mut t);
        assert!(text.contains("Option 'Z' is not offered for question 2."));
        assert!(text.contains("Please answer all questions before submitting."));
        assert!(text.contains("You scored 2 / 2 (100%)"));
    }

    #[test]
    fn test_quiz_quit_never_scores() {
        let mut t = term("A\n/quit\n");
        quiz(&quiz_api(), &mut t, 1).unwrap();
        assert!(!output(&mut t).contains("You scored"));
    }

    #[test]
    fn test_quiz_generation_error_is_shown() {
        let api = FakeApi::failing(400, Some("No extracted text available."));
        let mut t = term("n\n");
        quiz(&api, &mut t, 1).unwrap();
        assert!(output(&mut t).contains("Error: No extracted text available."));
    }

    #[test]
    fn test_interactive_chat_ignores_blank_lines() {
        let api = FakeApi::default();
        let mut t = term("   \nWhat is it?\n/clear\n/quit\n");
        chat(&api, &mut t, 1, None).unwrap();

        let text = output(&mut t);
        assert!(text.contains("Assistant: Answer to: What is it?"));
        assert!(text.contains("Chat cleared."));
        assert_eq!(api.calls.get(), 1);
    }

    #[test]
    fn test_one_shot_chat_blank_question_sends_nothing() {
        let api = FakeApi::default();
        assert!(chat(&api, &mut term(""), 1, Some("  ")).is_err());
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn test_one_shot_chat_error_text() {
        let api = FakeApi::failing(500, Some("Failed to chat with document: timeout"));
        let err = chat(&api, &mut term(""), 1, Some("hi")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to chat with document: timeout");
    }

    #[test]
    fn test_open_switches_between_tabs() {
        let api = FakeApi {
            documents: vec![document(1, "Notes", Some("Stored summary."))],
            ..FakeApi::default()
        };
        // summary tab: decline regenerate; chat tab: one question then quit; leave
        let mut t = term("summary\nn\nchat\nhello\n/quit\n/quit\n");
        open(&api, &mut t, 1).unwrap();

        let text = output(&mut t);
        assert!(text.contains("Stored summary."));
        assert!(text.contains("Summary  Quiz  [Chat]"));
        assert!(text.contains("Assistant: Answer to: hello"));
    }

    #[test]
    fn test_open_unknown_tab_name() {
        let api = FakeApi { documents: vec![document(1, "Notes", None)], ..FakeApi::default() };
        let mut t = term("notes\n/quit\n");
        open(&api, &mut t, 1).unwrap();
        assert!(output(&mut t).contains("Unknown tab 'notes'"));
    }
}
