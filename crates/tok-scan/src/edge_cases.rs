//! Edge case and property tests for tok-scan

use crate::{ScanError, Scanner, TokenKind, TokenStream};
use proptest::prelude::*;

fn scan_all(source: &str) -> TokenStream {
    Scanner::new(source).tokenize().unwrap()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_char_ident() {
    let t = scan_all("x");
    assert_eq!(t.as_slice()[0].text, "x");
    assert_eq!(t.as_slice()[0].kind, TokenKind::Identifier);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = scan_all(&name);
    assert_eq!(t.len(), 1);
    assert_eq!(t.as_slice()[0].text, name);
}

#[test]
fn test_edge_empty_string_literal() {
    let t = scan_all("\"\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t.as_slice()[0].kind, TokenKind::String);
    assert_eq!(t.as_slice()[0].text, "");
}

#[test]
fn test_edge_consecutive_operators() {
    let t = scan_all("(((;)))");
    assert_eq!(t.len(), 7);
    assert!(t.iter().all(|tok| tok.kind == TokenKind::Operator));
}

#[test]
fn test_edge_carriage_return_is_whitespace() {
    let t = scan_all("a\r\nb");
    assert_eq!(t.len(), 2);
    assert_eq!(t.as_slice()[1].line, 2);
}

#[test]
fn test_edge_tab_splits_identifiers() {
    let t = scan_all("a\tb");
    assert_eq!(t.len(), 2);
    assert_eq!(t.as_slice()[1].column, 3);
}

#[test]
fn test_edge_operator_chars_inside_string() {
    let t = scan_all("\"a = { b };\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t.as_slice()[0].text, "a = { b };");
}

#[test]
fn test_edge_comment_markers_inside_string() {
    let t = scan_all("\"// not a comment\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t.as_slice()[0].kind, TokenKind::String);
}

#[test]
fn test_edge_block_comment_adjacent_to_operator() {
    let t = scan_all("/*c*/;");
    assert_eq!(t.as_slice()[0].kind, TokenKind::BlockComment);
    assert_eq!(t.as_slice()[1].kind, TokenKind::Operator);
    assert_eq!(t.as_slice()[1].column, 6);
}

#[test]
fn test_edge_string_with_many_lines() {
    let t = scan_all("\"a\nb\nc\nd\" x");
    assert_eq!(t.as_slice()[0].text, "a\nb\nc\nd");
    assert_eq!(t.as_slice()[1].line, 4);
}

#[test]
fn test_edge_unicode_identifier_content() {
    // No Unicode-aware classification: non-ASCII is plain catch-all content.
    let t = scan_all("αβγ;");
    assert_eq!(t.as_slice()[0].text, "αβγ");
    assert_eq!(t.as_slice()[1].text, ";");
    assert_eq!(t.as_slice()[1].column, 4);
}

#[test]
fn test_edge_lone_backslash_in_string() {
    let t = scan_all("\"a\\b\"");
    assert_eq!(t.as_slice()[0].text, "a\\b");
}

#[test]
fn test_edge_escaped_quote_only() {
    let t = scan_all("\"\\\"\"");
    assert_eq!(t.as_slice()[0].text, "");
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_unterminated_string_position() {
    let err = Scanner::new("a;\n  \"x").tokenize().unwrap_err();
    assert_eq!(err, ScanError::UnterminatedString { line: 2, column: 3 });
}

#[test]
fn test_err_unterminated_block_comment_position() {
    let err = Scanner::new("/*").tokenize().unwrap_err();
    assert_eq!(
        err,
        ScanError::UnterminatedBlockComment { line: 1, column: 1 }
    );
}

#[test]
fn test_err_aborts_whole_call() {
    // Tokens scanned before the failure are not returned.
    let result = Scanner::new("ok ok \"").tokenize();
    assert!(result.is_err());
}

// ==================== PROPERTIES ====================

proptest! {
    #[test]
    fn prop_identifier_only_input_splits_at_whitespace(
        words in proptest::collection::vec("[a-z]{1,8}", 1..6)
    ) {
        let source = words.join(" ");
        let tokens = scan_all(&source);
        prop_assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(token.kind, TokenKind::Identifier);
            prop_assert_eq!(&token.text, word);
        }
    }

    #[test]
    fn prop_quoted_body_round_trips(body in "[a-z ]{0,20}") {
        let source = format!("\"{}\"", body);
        let tokens = scan_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens.as_slice()[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens.as_slice()[0].text, &body);
    }

    #[test]
    fn prop_tokenize_never_panics(source in "\\PC{0,64}") {
        let _ = Scanner::new(&source).tokenize();
    }

    #[test]
    fn prop_start_positions_increase(source in "[a-z=;{} \n]{0,40}") {
        if let Ok(tokens) = Scanner::new(&source).tokenize() {
            let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
            let mut sorted = positions.clone();
            sorted.sort();
            prop_assert_eq!(positions, sorted);
        }
    }
}
