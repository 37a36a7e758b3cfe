//! tok-scan - Classifying Tokenizer for Raw Source Text
//!
//! This crate converts raw source text into a flat stream of classified
//! tokens: strings, line comments, block comments, operators, and generic
//! identifiers, each tagged with the 1-based line and column where it begins.
//!
//! # Overview
//!
//! The scanner is a stateful cursor over an in-memory character buffer. A
//! dispatch loop inspects the current character (plus one character of
//! lookahead where needed) and delegates to one of four sub-scanners. The
//! whole input is scanned in one call; there is no streaming mode.
//!
//! # Example Usage
//!
//! ```
//! use tok_scan::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x = \"hi\"; // done");
//! let tokens = scanner.tokenize().unwrap();
//!
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::String,
//!         TokenKind::Operator,
//!         TokenKind::LineComment,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind, and token stream definitions
//! - [`scanner`] - Scanner implementation (dispatch loop and sub-scanners)
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Typed scan failures
//!
//! # Token Categories
//!
//! - **String**: single or double quoted, may span multiple lines; the
//!   terminator must match the opening quote.
//! - **Line comment**: `//` to end of line.
//! - **Block comment**: `/*` to the matching `*/`, may span multiple lines.
//! - **Operator**: literal match against a configured ordered list,
//!   defaulting to `=  { } ; . [ ] ( )`.
//! - **Identifier**: everything else, split at whitespace and
//!   operator-starting characters.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use scanner::Scanner;
pub use token::{Token, TokenKind, TokenStream};
