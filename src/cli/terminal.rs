// ============================================================
// Layer 1 — Terminal
// ============================================================
// A line-oriented prompt over any reader/writer pair. The real
// CLI wraps locked stdin/stdout; tests wrap a Cursor and a Vec.
//
// A prompt is only shown again after the previous action has
// finished, so a request in flight can never be triggered twice.

use std::io::{self, BufRead, Write};

pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    out:   W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `prompt`, then read one line without its line ending.
    /// Returns None at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Yes/no question. An empty answer picks `default`; end of input is "no".
    pub fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(answer) = self.ask(&format!("{prompt} {hint} "))? else {
                return Ok(false);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                ""          => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no"  => return Ok(false),
                _ => writeln!(self.out, "Please answer y or n.")?,
            }
        }
    }

    /// Show a progress line for a request that is about to block
    pub fn progress(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn term(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_endings_and_detects_eof() {
        let mut t = term("first\r\nsecond\n");
        assert_eq!(t.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(t.ask("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(t.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_confirm_defaults_and_retries() {
        let mut t = term("\nmaybe\nn\n");
        assert!(t.confirm("Go?", true).unwrap());
        assert!(!t.confirm("Go?", true).unwrap());
        let printed = String::from_utf8(t.out().clone()).unwrap();
        assert!(printed.contains("Please answer y or n."));
    }

    #[test]
    fn test_confirm_at_eof_is_no() {
        let mut t = term("");
        assert!(!t.confirm("Go?", true).unwrap());
    }
}
