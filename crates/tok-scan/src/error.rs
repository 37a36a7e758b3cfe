//! Error types for the scanning engine.
//!
//! Every failure aborts the tokenize call immediately and carries the
//! line/column context of the construct that caused it. There is no
//! resynchronization or recovery mode.

use thiserror::Error;

/// Error type for scanning operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A string literal's opening quote is never matched before the buffer
    /// ends. Positioned at the opening quote.
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    /// A `/*` is never matched with a `*/` before the buffer ends.
    /// Positioned at the opening delimiter.
    #[error("unterminated block comment starting at line {line}, column {column}")]
    UnterminatedBlockComment { line: u32, column: u32 },

    /// A character was flagged as operator-starting but no configured
    /// operator literal matches at that position. Only reachable with
    /// multi-character operators; indicates an inconsistent operator list.
    #[error("no configured operator matches '{found}' at line {line}, column {column}")]
    NoOperatorMatch { found: char, line: u32, column: u32 },
}

/// Result type alias for scanning operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
