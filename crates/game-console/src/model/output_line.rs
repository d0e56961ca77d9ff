//! Output lines and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an output line. Drives colour and font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCategory {
    /// Regular output (the console's "standard output").
    Info,
    /// Error output (the console's "standard error").
    Error,
    /// A line the user typed and committed.
    UserInput,
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputCategory::Info => "info",
            OutputCategory::Error => "error",
            OutputCategory::UserInput => "input",
        };
        f.write_str(name)
    }
}

/// A single line in the scrollback.
///
/// The category is fixed at creation. The text only grows, and only while the
/// line is the tail of the store (see [`LineStore::append_or_merge`]).
///
/// [`LineStore::append_or_merge`]: crate::state::LineStore::append_or_merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    text: String,
    category: OutputCategory,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, category: OutputCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> OutputCategory {
        self.category
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }
}
