//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and its dispatch loop.

use crate::cursor::Cursor;
use crate::error::ScanResult;
use crate::token::TokenStream;

/// The character-by-character scanning engine.
///
/// A scanner owns a cursor over an in-memory character buffer and produces an
/// ordered stream of classified tokens. The operator list is the only
/// configuration; it is fixed at construction time, and the set of
/// operator-starting characters is derived from it once and never mutated.
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Configured operator literals, in declaration order.
    operators: Vec<String>,

    /// First character of each configured operator.
    operator_starts: Vec<char>,
}

impl<'a> Scanner<'a> {
    /// The default operator list.
    pub const DEFAULT_OPERATORS: &'static [&'static str] =
        &["=", "{", "}", ";", ".", "[", "]", "(", ")"];

    /// Creates a scanner over the given source with the default operator list.
    pub fn new(source: &'a str) -> Self {
        Self::with_operators(source, Self::DEFAULT_OPERATORS)
    }

    /// Creates a scanner with a custom operator list.
    ///
    /// Operators are matched literally, in declaration order; the first full
    /// match wins. Multi-character operators sharing a first character are
    /// supported.
    pub fn with_operators(source: &'a str, operators: &[&str]) -> Self {
        let operators: Vec<String> = operators.iter().map(|op| op.to_string()).collect();
        let operator_starts = operators
            .iter()
            .filter_map(|op| op.chars().next())
            .collect();
        Self {
            cursor: Cursor::new(source),
            operators,
            operator_starts,
        }
    }

    /// Scans the entire source and returns the resulting token stream.
    ///
    /// This is the main entry point. Each position is classified in priority
    /// order: whitespace, string, line comment, block comment, operator,
    /// identifier. Quote and comment detection come before the operator and
    /// identifier cases, since the identifier scanner treats an
    /// operator-starting character as a terminator, not as content.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ScanError`] if the source ends inside a string or
    /// block comment, or if the operator configuration is inconsistent. A
    /// failure aborts the whole call; no partial stream is returned.
    pub fn tokenize(&mut self) -> ScanResult<TokenStream> {
        let mut tokens = TokenStream::new();

        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                // Whitespace and newlines are consumed silently; the cursor
                // handles line/column bookkeeping.
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '"' | '\'' => tokens.push(self.scan_string()?),
                '/' if self.cursor.peek_char(1) == '/' => {
                    tokens.push(self.scan_line_comment());
                },
                '/' if self.cursor.peek_char(1) == '*' => {
                    tokens.push(self.scan_block_comment()?);
                },
                c if self.is_operator_start(c) => tokens.push(self.scan_operator()?),
                _ => tokens.push(self.scan_identifier()),
            }
        }

        Ok(tokens)
    }

    /// Returns true if the character begins at least one configured operator.
    pub(crate) fn is_operator_start(&self, c: char) -> bool {
        self.operator_starts.contains(&c)
    }

    /// Returns the configured operator literals, in declaration order.
    pub(crate) fn operators(&self) -> &[String] {
        &self.operators
    }
}
