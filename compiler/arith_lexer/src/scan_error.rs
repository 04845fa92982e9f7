//! Scanner diagnostics.
//!
//! A [`ScanError`] pins one problem to a source line: the verbatim line
//! text, its zero-based line number, and the cursor's column on that line.
//! Errors are collected into the scan result rather than returned early.

use std::fmt::Write as _;

/// What kind of scan error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScanErrorKind {
    /// A character that is not whitespace, a digit, an operator or a
    /// line break.
    UnrecognizedCharacter { found: char },
    /// A `.` after an integer part that is not followed by a digit.
    /// `found` is the character after the dot, `None` at end of input.
    MalformedNumericLiteral { found: Option<char> },
}

impl ScanErrorKind {
    /// Human-readable message for this error.
    pub fn message(&self) -> String {
        match self {
            ScanErrorKind::UnrecognizedCharacter { found } => {
                format!("Unrecognized character '{found}'")
            }
            ScanErrorKind::MalformedNumericLiteral { found: Some(c) } => {
                format!("Expected digit after '.', got '{c}'")
            }
            ScanErrorKind::MalformedNumericLiteral { found: None } => {
                r"Expected digit after '.', got '\0'".to_owned()
            }
        }
    }
}

/// One scanner diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{message} at {line_number}:{line_index}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub message: String,
    /// Verbatim text of the line the error was recorded on.
    pub line: String,
    /// Zero-based count of newlines processed before the error.
    pub line_number: usize,
    /// Zero-based column of the cursor within the line.
    pub line_index: usize,
}

impl ScanError {
    #[cold]
    pub fn new(
        kind: ScanErrorKind,
        line: impl Into<String>,
        line_number: usize,
        line_index: usize,
    ) -> Self {
        Self {
            message: kind.message(),
            kind,
            line: line.into(),
            line_number,
            line_index,
        }
    }

    /// Render a diagnostic snippet with a caret under the offending
    /// character.
    ///
    /// On every line after the first, `line_index` counts the `\n` that
    /// opened the line, so the caret sits one column left of it there.
    ///
    /// ```text
    /// error: Unrecognized character '~'
    ///  --> 0:0
    ///   |
    ///   | ~ @
    ///   | ^
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error: {}", self.message);
        let _ = writeln!(out, " --> {}:{}", self.line_number, self.line_index);
        out.push_str("  |\n");
        let _ = writeln!(out, "  | {}", self.line.trim_end_matches('\r'));
        let _ = write!(out, "  | {}^", " ".repeat(self.display_column()));
        out
    }

    /// Zero-based column of the offending character within `line`.
    pub fn display_column(&self) -> usize {
        if self.line_number > 0 {
            self.line_index.saturating_sub(1)
        } else {
            self.line_index
        }
    }
}
