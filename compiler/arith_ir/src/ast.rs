//! Expression shapes for unary and binary operator applications.
//!
//! These are the node shapes a parser over [`TokenList`](crate::TokenList)
//! will build. Operands are literals only; nesting is not modelled yet.
//!
//! All types have Clone, Eq, `PartialEq`, Hash, Debug. Number literals store
//! their `f64` as bits, same as [`TokenKind::Number`].

use std::fmt;

use crate::TokenKind;

/// Arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Operator spelled by an operator token, or `None` for any other token.
    pub fn from_token(token: &TokenKind) -> Option<Self> {
        match token {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Times => Some(Self::Mul),
            TokenKind::Divide => Some(Self::Div),
            TokenKind::Number(_) | TokenKind::Eof => None,
        }
    }

    /// The marker token that spells this operator.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Times,
            Self::Div => TokenKind::Divide,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Literal operand.
///
/// Only `Number` is produced by the scanner today; `Str` and `Bool` are
/// reserved for when the language grows string and boolean literals.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Literal {
    Number(u64),
    Str(String),
    Bool(bool),
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }

    /// Literal carried by a number token.
    pub fn from_token(token: &TokenKind) -> Option<Self> {
        token.number_value().map(Literal::number)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(bits) => Some(f64::from_bits(*bits)),
            Literal::Str(_) | Literal::Bool(_) => None,
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            Literal::Str(s) => write!(f, "Str({s:?})"),
            Literal::Bool(b) => write!(f, "Bool({b})"),
        }
    }
}

/// Prefix operator applied to a literal: `-2`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Unary {
    pub operator: Operator,
    pub value: Literal,
}

/// Infix operator applied to two literals: `1 + 2`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Binary {
    pub operator: Operator,
    pub left: Literal,
    pub right: Literal,
}

/// Either operator shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorCombination {
    Unary(Unary),
    Binary(Binary),
}

impl OperatorCombination {
    pub fn operator(&self) -> Operator {
        match self {
            OperatorCombination::Unary(u) => u.operator,
            OperatorCombination::Binary(b) => b.operator,
        }
    }
}

impl From<Unary> for OperatorCombination {
    fn from(u: Unary) -> Self {
        OperatorCombination::Unary(u)
    }
}

impl From<Binary> for OperatorCombination {
    fn from(b: Binary) -> Self {
        OperatorCombination::Binary(b)
    }
}
