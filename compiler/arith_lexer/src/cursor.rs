//! Line-tracking cursor over the scanner's source text.
//!
//! The cursor advances through the source one character at a time and
//! reports `0x00` for every position at or past the end of the source, so
//! the scanner can dispatch on the sentinel byte like any other. Interior
//! null bytes also read as `0x00`; [`Cursor::is_eof`] tells them apart by
//! comparing the position against the source length.
//!
//! Alongside the byte position the cursor keeps the scanner's line
//! bookkeeping: `line_number` counts newlines handed to
//! [`Cursor::newline`], and `line_index` counts characters advanced over
//! since the last such newline.

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Everything that is not a multi-byte leading byte (ASCII, continuation,
/// invalid, the sentinel) counts as 1.
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Cursor state for a single scan.
///
/// Created fresh by the scanner for every call and dropped with it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
    /// Newlines processed so far.
    line_number: usize,
    /// Characters advanced over since the last processed newline.
    line_index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line_number: 0,
            line_index: 0,
        }
    }

    /// Returns the byte at the current position, or `0x00` at or past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, with the same
    /// sentinel rule as [`current`](Self::current).
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Returns `true` once the position has reached or passed the end of
    /// the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[inline]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// The full character at the current position, or `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    /// The full character following the current one, or `None` if the
    /// current character is the last.
    pub fn peek_char(&self) -> Option<char> {
        let next = self.pos + utf8_char_width(self.current());
        self.source.get(next..)?.chars().next()
    }

    /// Advance past one full character.
    ///
    /// Advancing at EOF is allowed; the position simply moves further past
    /// the end and keeps reading as the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += utf8_char_width(self.current());
        self.line_index += 1;
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` must only accept ASCII bytes and must reject `0x00`, so the
    /// loop stops at the sentinel and every step is one character wide.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
            self.line_index += 1;
        }
    }

    /// Record a line break at the current position.
    ///
    /// Resets `line_index` and bumps `line_number`. Does not move the
    /// cursor; the scanner advances past the `\n` itself.
    #[inline]
    pub fn newline(&mut self) {
        self.line_index = 0;
        self.line_number += 1;
    }

    /// Text of source line `line_number`, splitting on `\n` only.
    ///
    /// A `\r` before the line break stays part of the text.
    pub fn line_text(&self) -> &'a str {
        self.source
            .split('\n')
            .nth(self.line_number)
            .unwrap_or_default()
    }

    /// Source text from `start` up to the current position.
    ///
    /// `start` must be a character boundary at or before the current
    /// position, and the current position must not be past the end.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(
            start <= self.pos && self.pos <= self.source.len(),
            "slice {start}..{} out of bounds for source of length {}",
            self.pos,
            self.source.len()
        );
        self.source.get(start..self.pos).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
