// ============================================================
// Layer 3 — Navigation
// ============================================================
// Which view the CLI should show next, and which tab of the
// document detail view is active.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ClientError;

/// A view the CLI can move to after a use case completes.
/// Upload returns `DocumentDetail(id)` on success, for example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DocumentList,
    DocumentDetail(i64),
}

/// Sub-views of the document detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Quiz,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Summary, Tab::Quiz, Tab::Chat];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Quiz    => "Quiz",
            Tab::Chat    => "Chat",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "s" => Ok(Tab::Summary),
            "quiz"    | "q" => Ok(Tab::Quiz),
            "chat"    | "c" => Ok(Tab::Chat),
            other => Err(ClientError::Validation(format!(
                "Unknown tab '{other}'. Choose summary, quiz or chat."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_summary() {
        assert_eq!(Tab::default(), Tab::Summary);
    }

    #[test]
    fn test_parse_tab_names_and_shortcuts() {
        assert_eq!("Quiz".parse::<Tab>().unwrap(), Tab::Quiz);
        assert_eq!(" c ".parse::<Tab>().unwrap(), Tab::Chat);
        assert!("notes".parse::<Tab>().is_err());
    }
}
