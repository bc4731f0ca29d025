// tests/lexer_tests.rs

use cflat_lang::ast::{Pos, TokenKind};
use cflat_lang::lexer::{LexError, Lexer};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Keywords and identifiers
// ============================================================================

#[test]
fn test_all_keywords() {
    assert_eq!(
        kinds("int bool void true false struct cin cout if else while repeat return"),
        vec![
            TokenKind::Int,
            TokenKind::Bool,
            TokenKind::Void,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Struct,
            TokenKind::Cin,
            TokenKind::Cout,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Repeat,
            TokenKind::Return,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(
        kinds("x _y under_score x1 intx"),
        vec![
            TokenKind::Id("x".to_string()),
            TokenKind::Id("_y".to_string()),
            TokenKind::Id("under_score".to_string()),
            TokenKind::Id("x1".to_string()),
            TokenKind::Id("intx".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    // `iff` and `returned` must not be cut into keyword + rest
    assert_eq!(
        kinds("iff returned whilex"),
        vec![
            TokenKind::Id("iff".to_string()),
            TokenKind::Id("returned".to_string()),
            TokenKind::Id("whilex".to_string()),
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Operators and punctuation
// ============================================================================

#[test]
fn test_single_char_operators() {
    assert_eq!(
        kinds("{ } ( ) ; , . = + - * / ! < >"),
        vec![
            TokenKind::LCurly,
            TokenKind::RCurly,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Divide,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators() {
    assert_eq!(
        kinds(">> << ++ -- && || == != <= >="),
        vec![
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEq,
            TokenKind::GreaterEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_maximal_munch() {
    // `==` vs `=` and `<=` vs `<` resolve greedily
    assert_eq!(
        kinds("= == a<=b a<b"),
        vec![
            TokenKind::Assign,
            TokenKind::Equals,
            TokenKind::Id("a".to_string()),
            TokenKind::LessEq,
            TokenKind::Id("b".to_string()),
            TokenKind::Id("a".to_string()),
            TokenKind::Less,
            TokenKind::Id("b".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_minus_minus_vs_spaced_minus() {
    assert_eq!(
        kinds("a--; a - -b"),
        vec![
            TokenKind::Id("a".to_string()),
            TokenKind::MinusMinus,
            TokenKind::Semicolon,
            TokenKind::Id("a".to_string()),
            TokenKind::Minus,
            TokenKind::Minus,
            TokenKind::Id("b".to_string()),
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_int_literals() {
    assert_eq!(
        kinds("0 7 2147483647"),
        vec![
            TokenKind::IntLiteral(0),
            TokenKind::IntLiteral(7),
            TokenKind::IntLiteral(2147483647),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_int_literal_overflow() {
    let err = Lexer::new("9999999999").tokenize().unwrap_err();
    assert!(matches!(err, LexError::IntLiteralTooLarge(_)));
}

#[test]
fn test_string_literal() {
    assert_eq!(
        kinds(r#""hello world""#),
        vec![
            TokenKind::StringLiteral("hello world".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r#""a\nb\tc\"d\\e""#),
        vec![
            TokenKind::StringLiteral("a\nb\tc\"d\\e".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let err = Lexer::new("\"no closing quote").tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString(_)));
}

#[test]
fn test_string_may_not_span_lines() {
    let err = Lexer::new("\"line one\nline two\"").tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString(_)));
}

#[test]
fn test_invalid_escape() {
    let err = Lexer::new(r#""bad \q escape""#).tokenize().unwrap_err();
    assert!(matches!(err, LexError::InvalidEscape('q', _)));
}

// ============================================================================
// Comments and whitespace
// ============================================================================

#[test]
fn test_line_comments() {
    assert_eq!(
        kinds("x // the rest is ignored\ny ## this style too\nz"),
        vec![
            TokenKind::Id("x".to_string()),
            TokenKind::Id("y".to_string()),
            TokenKind::Id("z".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_at_eof() {
    assert_eq!(
        kinds("x // no trailing newline"),
        vec![TokenKind::Id("x".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_single_slash_is_divide() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Id("a".to_string()),
            TokenKind::Divide,
            TokenKind::Id("b".to_string()),
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_positions_single_line() {
    let tokens = Lexer::new("int x;").tokenize().unwrap();
    assert_eq!(tokens[0].pos, Pos::new(1, 1));
    assert_eq!(tokens[1].pos, Pos::new(1, 5));
    assert_eq!(tokens[2].pos, Pos::new(1, 6));
}

#[test]
fn test_positions_across_lines() {
    let tokens = Lexer::new("int x;\n  bool y;").tokenize().unwrap();
    // `bool` starts at line 2, column 3
    assert_eq!(tokens[3].kind, TokenKind::Bool);
    assert_eq!(tokens[3].pos, Pos::new(2, 3));
}

#[test]
fn test_position_of_two_char_token() {
    let tokens = Lexer::new("a == b").tokenize().unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].pos, Pos::new(1, 3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_char() {
    let err = Lexer::new("x $ y").tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnexpectedChar('$', _)));
}

#[test]
fn test_lone_ampersand() {
    let err = Lexer::new("a & b").tokenize().unwrap_err();
    assert_eq!(err, LexError::UnexpectedChar('&', Pos::new(1, 3)));
}

#[test]
fn test_lone_pipe() {
    let err = Lexer::new("a | b").tokenize().unwrap_err();
    assert_eq!(err, LexError::UnexpectedChar('|', Pos::new(1, 3)));
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}
