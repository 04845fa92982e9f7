//! Hand-written scanner producing the token list or the error list.
//!
//! # Design
//!
//! Main dispatch looks at one byte per iteration. Each arm handles its
//! character class, and the loop then advances one character
//! unconditionally. The number scanner consumes its own digits before that
//! trailing advance, so the character directly after a literal is passed
//! over without being dispatched: `1+2` scans as `1 2`, and a `\n` right
//! after a literal does not count as a line break.
//!
//! Once an error is recorded the rest of the physical line is skipped, so
//! each line contributes at most one diagnostic.

use arith_ir::{List, TokenKind, TokenList};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::scan_error::{ScanError, ScanErrorKind};
use crate::ScanResult;

/// State for one `scan` call.
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: TokenList,
    errors: List<ScanError>,
    /// Set by the first error; never cleared.
    errored: bool,
    /// Skip everything up to the next `\n`.
    skip_line: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: TokenList::new(),
            errors: List::new(),
            errored: false,
            skip_line: false,
        }
    }

    /// Scan to the end of the source.
    pub(crate) fn run(mut self) -> ScanResult {
        loop {
            if self.cursor.is_eof() {
                return self.finish();
            }
            match self.cursor.current() {
                b'\n' => {
                    self.cursor.newline();
                    self.skip_line = false;
                }
                _ if self.skip_line => {}
                byte @ (b'+' | b'-' | b'*' | b'/') => {
                    if let Some(kind) = TokenKind::from_operator_byte(byte) {
                        self.emit(kind);
                    }
                }
                b' ' | b'\t' | b'\r' => {}
                b'0'..=b'9' => self.number(),
                _ => self.unrecognized(),
            }
            self.cursor.advance();
        }
    }

    fn finish(mut self) -> ScanResult {
        if self.errored {
            debug!(errors = self.errors.len(), "scan failed");
            return Err(self.errors);
        }
        self.tokens.push(TokenKind::Eof);
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    #[inline]
    fn emit(&mut self, kind: TokenKind) {
        trace!(
            pos = self.cursor.pos(),
            line = self.cursor.line_number(),
            token = %kind,
            "token"
        );
        self.tokens.push(kind);
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Scan `digits ('.' digits)?` starting at a digit.
    ///
    /// A `.` not followed by a digit is an error; no token is produced and
    /// the cursor is left on the `.`.
    fn number(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' {
            if !self.cursor.peek().is_ascii_digit() {
                let found = self.cursor.peek_char();
                self.error(ScanErrorKind::MalformedNumericLiteral { found });
                return;
            }
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        // `f64::from_str` accepts every `digits ('.' digits)?` slice;
        // out-of-range magnitudes parse to infinity rather than failing.
        let text = self.cursor.slice_from(start);
        let parsed = text.parse::<f64>();
        debug_assert!(parsed.is_ok(), "number literal {text:?} failed to parse");
        if let Ok(value) = parsed {
            self.emit(TokenKind::number(value));
        }
    }

    // ─── Errors ────────────────────────────────────────────────────

    fn unrecognized(&mut self) {
        // Only reachable before EOF, so a character is always present.
        let found = self.cursor.current_char().unwrap_or('\0');
        self.error(ScanErrorKind::UnrecognizedCharacter { found });
    }

    /// Record an error at the cursor and skip the rest of the line.
    #[cold]
    fn error(&mut self, kind: ScanErrorKind) {
        self.errored = true;
        let err = ScanError::new(
            kind,
            self.cursor.line_text(),
            self.cursor.line_number(),
            self.cursor.line_index(),
        );
        debug!(
            line = err.line_number,
            index = err.line_index,
            message = %err.message,
            "scan error"
        );
        self.errors.push(err);
        self.skip_line = true;
    }
}
