//! String literal scanning.
//!
//! Strings may be single or double quoted and may extend over multiple
//! lines. The terminator is fixed at scan start: a string opened with `"`
//! ends only at `"`, one opened with `'` only at `'`.

use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal starting at the opening quote.
    ///
    /// The opening and closing quotes are consumed but excluded from the
    /// token text. A backslash immediately followed by the terminator quote
    /// is treated as an escaped quote: both characters are consumed and
    /// neither is appended. A backslash followed by anything else is
    /// ordinary content. Embedded newlines are kept in the text and advance
    /// the line counter.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedString`] if the buffer ends before the
    /// terminator, positioned at the opening quote.
    pub(crate) fn scan_string(&mut self) -> ScanResult<Token> {
        let line = self.cursor.line();
        let column = self.cursor.column();
        let terminator = self.cursor.current_char();
        self.cursor.advance();

        let mut text = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(ScanError::UnterminatedString { line, column });
            }

            let c = self.cursor.current_char();

            if c == terminator {
                self.cursor.advance();
                break;
            }

            if c == '\\' && self.cursor.peek_char(1) == terminator {
                // Escaped terminator: skip both, append neither.
                self.cursor.advance_n(2);
                continue;
            }

            text.push(c);
            self.cursor.advance();
        }

        Ok(Token::new(TokenKind::String, text, line, column))
    }
}
