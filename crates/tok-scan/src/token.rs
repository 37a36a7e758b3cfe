//! Token type definitions.
//!
//! A token is a classified, positioned run of characters. The same `Token`
//! record is shared by the scanning core and every consumer; the `Display`
//! impls fix the `KIND{text}` rendering used by the driver and the tests.

use std::fmt;

/// Classification of a scanned token.
///
/// The five classes are mutually exclusive and exhaustive: every
/// non-whitespace character in the input belongs to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A quoted string literal, single or double quoted.
    String,
    /// A `//` comment running to the end of the line.
    LineComment,
    /// A `/* ... */` comment, possibly spanning multiple lines.
    BlockComment,
    /// A literal match against the configured operator list.
    Operator,
    /// The catch-all class: any run of characters not classified above.
    Identifier,
}

impl TokenKind {
    /// Returns the upper-cased label used in the `KIND{text}` rendering.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::LineComment => "COMMENT",
            TokenKind::BlockComment => "MULTILINE COMMENT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

/// A single token produced by scanning.
///
/// `text` holds the characters belonging to the token, excluding the
/// delimiters that only mark boundaries (quotes, `//`, `/* */`). `line` and
/// `column` are the 1-based position of the token's first character,
/// recorded at the moment scanning of the token began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's lexical class.
    pub kind: TokenKind,
    /// The token's content, without boundary delimiters.
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.kind.label(), self.text)
    }
}

/// An ordered, append-only collection of tokens.
///
/// Insertion order is scan order; no token is removed or mutated after being
/// appended. A stream is created empty at the start of a tokenize call,
/// populated by the dispatch loop, and handed to the caller as the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty token stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to the stream.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Returns the number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns an iterator over the tokens in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
