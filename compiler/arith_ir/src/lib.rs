//! Arith IR - token and expression-shape types
//!
//! This crate contains the data structures shared by the arith tools:
//! - `TokenKind`/`TokenTag` and `TokenList` for scanner output
//! - `List<T>`, the ordered sequence the scanner returns
//! - Operator expression shapes (`Unary`, `Binary`) for the parser
//!
//! Every type is Clone, Eq, `PartialEq`, Hash and Debug. Types that contain
//! floats store them as u64 bits for Hash compatibility.

pub mod ast;
mod list;
mod token;

pub use ast::{Binary, Literal, Operator, OperatorCombination, Unary};
pub use list::List;
pub use token::{TokenKind, TokenList, TokenTag};
