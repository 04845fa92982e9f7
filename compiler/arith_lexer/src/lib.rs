//! Scanner for the arith expression language.
//!
//! Turns source text made of decimal number literals and the operators
//! `+ - * /` into a [`TokenList`], or into the list of [`ScanError`]s found.
//!
//! # Usage
//!
//! ```
//! use arith_ir::TokenKind;
//! use arith_lexer::scan;
//!
//! let tokens = scan("1 + 2").unwrap_or_default();
//! assert_eq!(
//!     tokens.as_slice(),
//!     &[TokenKind::number(1.0), TokenKind::Plus, TokenKind::number(2.0), TokenKind::Eof],
//! );
//! ```
//!
//! A scan either succeeds completely or fails: once any error is recorded
//! the tokens scanned so far are discarded and only the errors are returned,
//! at most one per source line.

mod cursor;
mod scan_error;
mod scanner;

use std::sync::Once;

use arith_ir::{List, TokenList};

pub use scan_error::{ScanError, ScanErrorKind};

/// Outcome of a scan: every token ending with `Eof`, or every error.
pub type ScanResult = Result<TokenList, List<ScanError>>;

/// Scan `source` into tokens.
///
/// Returns `Ok` with a list ending in [`TokenKind::Eof`](arith_ir::TokenKind::Eof)
/// if no error occurred, otherwise `Err` with the errors in line order.
pub fn scan(source: &str) -> ScanResult {
    scanner::Scanner::new(source).run()
}

/// Returns `true` if `result` holds errors rather than tokens.
#[inline]
pub fn has_errors(result: &ScanResult) -> bool {
    result.is_err()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=arith_lexer=debug` or `RUST_LOG=arith_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
