//! Identifier scanning.
//!
//! The catch-all class: any run of characters not claimed by the other
//! scanners becomes one identifier token. There is no internal structure or
//! validation, so numbers, keywords, and stray punctuation all land here.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier at the current position.
    ///
    /// Consumes characters until whitespace (space, tab, newline, carriage
    /// return), an operator-starting character, or end of buffer.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let line = self.cursor.line();
        let column = self.cursor.column();

        let mut text = String::new();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if matches!(c, ' ' | '\t' | '\n' | '\r') || self.is_operator_start(c) {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }

        Token::new(TokenKind::Identifier, text, line, column)
    }
}
