//! Line and block comment scanning.
//!
//! Both comment forms produce tokens; the `//` and `/* */` delimiters mark
//! boundaries and are excluded from the token text.

use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a `//` comment up to (not including) the next newline.
    ///
    /// The newline is left for the dispatch loop. Terminates cleanly at end
    /// of buffer when no trailing newline exists.
    pub(crate) fn scan_line_comment(&mut self) -> Token {
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance_n(2);

        let mut text = String::new();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }

        Token::new(TokenKind::LineComment, text, line, column)
    }

    /// Scans a `/*` comment up to and including the matching `*/`.
    ///
    /// Spans multiple lines; embedded newlines advance the line counter and
    /// reset the column to 1.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedBlockComment`] if the buffer ends before
    /// `*/`, positioned at the opening delimiter.
    pub(crate) fn scan_block_comment(&mut self) -> ScanResult<Token> {
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance_n(2);

        let mut text = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(ScanError::UnterminatedBlockComment { line, column });
            }

            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                break;
            }

            text.push(self.cursor.current_char());
            self.cursor.advance();
        }

        Ok(Token::new(TokenKind::BlockComment, text, line, column))
    }
}
