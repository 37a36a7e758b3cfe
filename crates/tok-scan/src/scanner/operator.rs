//! Operator scanning.
//!
//! Operators are matched literally against the configured list, in
//! declaration order; the first full match wins.

use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans one operator at the current position.
    ///
    /// Consumes exactly the characters of the first configured operator
    /// whose literal matches at the current offset.
    ///
    /// # Errors
    ///
    /// [`ScanError::NoOperatorMatch`] if the current character is
    /// operator-starting but no candidate matches in full. With
    /// single-character operators this cannot happen; it indicates an
    /// inconsistent multi-character operator list.
    pub(crate) fn scan_operator(&mut self) -> ScanResult<Token> {
        let line = self.cursor.line();
        let column = self.cursor.column();
        let rest = self.cursor.remaining();

        let matched = self
            .operators()
            .iter()
            .find(|op| rest.starts_with(op.as_str()))
            .cloned();

        match matched {
            Some(op) => {
                self.cursor.advance_n(op.chars().count());
                Ok(Token::new(TokenKind::Operator, op, line, column))
            },
            None => Err(ScanError::NoOperatorMatch {
                found: self.cursor.current_char(),
                line,
                column,
            }),
        }
    }
}
