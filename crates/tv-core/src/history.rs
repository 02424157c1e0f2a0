//! Chronological log of every command submitted in a session.
//!
//! Kept for diagnostics and transcripts; game logic never consults it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The raw input as submitted.
    pub input: String,
    /// When it was submitted.
    pub at: DateTime<Utc>,
}

/// An ordered log of submitted commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<CommandRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the log.
    pub fn record(&mut self, input: impl Into<String>) {
        self.entries.push(CommandRecord {
            input: input.into(),
            at: Utc::now(),
        });
    }

    /// All records, oldest first.
    pub fn entries(&self) -> &[CommandRecord] {
        &self.entries
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export as plain text, one command per line.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.input);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut history = History::new();
        history.record("go north");
        history.record("take rose");

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].input, "go north");
        assert_eq!(history.entries()[1].input, "take rose");
    }

    #[test]
    fn text_export_is_one_command_per_line() {
        let mut history = History::new();
        history.record("look");
        history.record("inventory");
        assert_eq!(history.export_text(), "look\ninventory\n");
    }

    #[test]
    fn serde_roundtrip() {
        let mut history = History::new();
        history.record("go north");
        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
    }
}
