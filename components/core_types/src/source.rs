//! Source line and program text types.
//!
//! Every instruction and every error points back at the [`SourceLine`] it
//! came from, so diagnostics can print `file: line >>> text`.

use std::fmt;

/// One non-empty line of program text.
///
/// Created once by the source loader and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use core_types::SourceLine;
///
/// let line = SourceLine::new("main.lmp", 10, "+ 1");
///
/// assert_eq!(line.number, 10);
/// assert_eq!(line.to_string(), "main.lmp: 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLine {
    /// Name of the file the line was read from
    pub origin: String,
    /// Line number (1-based)
    pub number: usize,
    /// Trimmed line text
    pub text: String,
}

impl SourceLine {
    /// Create a new source line
    pub fn new(origin: impl Into<String>, number: usize, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            number,
            text: text.into(),
        }
    }

    /// Whitespace-separated tokens of the line
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.number)
    }
}

/// A loaded program: its name and its non-empty lines, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Source {
    /// File name (or any caller-chosen name for in-memory sources)
    pub name: String,
    /// Non-empty lines in file order
    pub lines: Vec<SourceLine>,
}

impl Source {
    /// Build a source from raw text, dropping blank lines.
    ///
    /// Line numbers refer to the raw text, so blank lines still count.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let name = name.into();
        let lines = text
            .lines()
            .enumerate()
            .filter_map(|(index, raw)| {
                let cleaned = raw.trim();
                if cleaned.is_empty() {
                    None
                } else {
                    Some(SourceLine::new(name.clone(), index + 1, cleaned))
                }
            })
            .collect();

        Self { name, lines }
    }

    /// Last line of the source, or a placeholder at line 0 when empty
    pub fn last_line(&self) -> SourceLine {
        self.lines
            .last()
            .cloned()
            .unwrap_or_else(|| SourceLine::new(self.name.clone(), 0, ""))
    }

    /// Number of non-empty lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the source has no non-empty lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
