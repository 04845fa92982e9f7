//! Token kinds produced by the scanner.
//!
//! A token is either a *marker* (an operator or the end-of-input marker,
//! carrying no payload) or a *literal* carrying a numeric value.

use std::fmt;

use crate::List;

/// Ordered token sequence produced by a successful scan.
pub type TokenList = List<TokenKind>;

/// A scanned token.
///
/// Number literals store their `f64` as raw bits so the type can be
/// `Eq + Hash`. Use [`TokenKind::number`] to build one and
/// [`TokenKind::number_value`] to read it back.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// Numeric literal: `1`, `323`, `3.25` (stored as bits for Eq/Hash)
    Number(u64),
    /// End of input. Always the last token of a successful scan.
    Eof,
}

/// Payload-free discriminant of a [`TokenKind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    Plus = 0,
    Minus = 1,
    Times = 2,
    Divide = 3,
    NumberLit = 4,
    Eof = 5,
}

impl TokenTag {
    /// Every tag, in discriminant order.
    pub const ALL: [TokenTag; 6] = [
        TokenTag::Plus,
        TokenTag::Minus,
        TokenTag::Times,
        TokenTag::Divide,
        TokenTag::NumberLit,
        TokenTag::Eof,
    ];

    /// Textual meaning of the tag.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            TokenTag::Plus => "+",
            TokenTag::Minus => "-",
            TokenTag::Times => "*",
            TokenTag::Divide => "/",
            TokenTag::NumberLit => "number",
            TokenTag::Eof => "end of input",
        }
    }

    /// Returns `true` for tags whose tokens never carry a payload.
    pub const fn is_marker(self) -> bool {
        !matches!(self, TokenTag::NumberLit)
    }
}

impl TokenKind {
    /// Build a number literal token.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// Numeric payload, or `None` for marker tokens.
    #[inline]
    pub fn number_value(&self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Map a single-character operator byte to its marker token.
    pub fn from_operator_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Times),
            b'/' => Some(TokenKind::Divide),
            _ => None,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Times => TokenTag::Times,
            TokenKind::Divide => TokenTag::Divide,
            TokenKind::Number(_) => TokenTag::NumberLit,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Returns `true` for `+ - * /`.
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Divide
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            _ => write!(f, "{:?}", self.tag()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(bits) => write!(f, "{}", f64::from_bits(*bits)),
            TokenKind::Eof => f.write_str("<eof>"),
            _ => f.write_str(self.tag().as_symbol()),
        }
    }
}
