use crate::ast::{Pos, Token, TokenKind};
use std::fmt;

/// A lexical error, with the position of the offending character.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that begins no token (also covers lone `&` and `|`)
    UnexpectedChar(char, Pos),
    /// String literal missing its closing quote
    UnterminatedString(Pos),
    /// Backslash followed by something other than `n t r " \`
    InvalidEscape(char, Pos),
    /// Decimal literal that does not fit in an `i32`
    IntLiteralTooLarge(Pos),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar(ch, pos) => {
                write!(f, "{}: unexpected character '{}'", pos, ch)
            }
            LexError::UnterminatedString(pos) => {
                write!(f, "{}: unterminated string literal", pos)
            }
            LexError::InvalidEscape(ch, pos) => {
                write!(f, "{}: invalid escape sequence '\\{}'", pos, ch)
            }
            LexError::IntLiteralTooLarge(pos) => {
                write!(f, "{}: integer literal out of range", pos)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            col: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.position += 1;
    }

    fn pos(&self) -> Pos {
        Pos::new(self.line, self.col)
    }

    /// Skip whitespace and comments. Comments run from `//` or `##` to
    /// the end of the line.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while let Some(ch) = self.current_char() {
                if ch.is_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }

            let comment = matches!(
                (self.current_char(), self.peek_char(1)),
                (Some('/'), Some('/')) | (Some('#'), Some('#'))
            );
            if !comment {
                return;
            }
            while let Some(ch) = self.current_char() {
                if ch == '\n' {
                    break;
                }
                self.advance();
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.pos();
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\n' => return Err(LexError::UnterminatedString(start)),
                '\\' => {
                    let escape_pos = self.pos();
                    self.advance(); // consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\\') => result.push('\\'),
                        Some(ch) => return Err(LexError::InvalidEscape(ch, escape_pos)),
                        None => return Err(LexError::UnterminatedString(start)),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString(start))
    }

    fn read_number(&mut self) -> Result<TokenKind, LexError> {
        let start = self.pos();
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match number.parse::<i32>() {
            Ok(n) => Ok(TokenKind::IntLiteral(n)),
            Err(_) => Err(LexError::IntLiteralTooLarge(start)),
        }
    }

    /// Scan the next token. Returns `Eof` at end of input (and keeps
    /// returning it thereafter).
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let pos = self.pos();
        let kind = match self.current_char() {
            None => TokenKind::Eof,
            Some('{') => {
                self.advance();
                TokenKind::LCurly
            }
            Some('}') => {
                self.advance();
                TokenKind::RCurly
            }
            Some('(') => {
                self.advance();
                TokenKind::LParen
            }
            Some(')') => {
                self.advance();
                TokenKind::RParen
            }
            Some(';') => {
                self.advance();
                TokenKind::Semicolon
            }
            Some(',') => {
                self.advance();
                TokenKind::Comma
            }
            Some('.') => {
                self.advance();
                TokenKind::Dot
            }
            Some('*') => {
                self.advance();
                TokenKind::Times
            }
            Some('/') => {
                self.advance();
                TokenKind::Divide
            }
            Some('+') => {
                if self.peek_char(1) == Some('+') {
                    self.advance();
                    self.advance();
                    TokenKind::PlusPlus
                } else {
                    self.advance();
                    TokenKind::Plus
                }
            }
            Some('-') => {
                if self.peek_char(1) == Some('-') {
                    self.advance();
                    self.advance();
                    TokenKind::MinusMinus
                } else {
                    self.advance();
                    TokenKind::Minus
                }
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::Equals
                } else {
                    self.advance();
                    TokenKind::Assign
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::NotEquals
                } else {
                    self.advance();
                    TokenKind::Not
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('<') {
                    self.advance();
                    self.advance();
                    TokenKind::Write
                } else if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::LessEq
                } else {
                    self.advance();
                    TokenKind::Less
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('>') {
                    self.advance();
                    self.advance();
                    TokenKind::Read
                } else if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::GreaterEq
                } else {
                    self.advance();
                    TokenKind::Greater
                }
            }
            Some('&') => {
                if self.peek_char(1) == Some('&') {
                    self.advance();
                    self.advance();
                    TokenKind::And
                } else {
                    return Err(LexError::UnexpectedChar('&', pos));
                }
            }
            Some('|') => {
                if self.peek_char(1) == Some('|') {
                    self.advance();
                    self.advance();
                    TokenKind::Or
                } else {
                    return Err(LexError::UnexpectedChar('|', pos));
                }
            }
            Some('"') => TokenKind::StringLiteral(self.read_string()?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "int" => TokenKind::Int,
                    "bool" => TokenKind::Bool,
                    "void" => TokenKind::Void,
                    "true" => TokenKind::True,
                    "false" => TokenKind::False,
                    "struct" => TokenKind::Struct,
                    "cin" => TokenKind::Cin,
                    "cout" => TokenKind::Cout,
                    "if" => TokenKind::If,
                    "else" => TokenKind::Else,
                    "while" => TokenKind::While,
                    "repeat" => TokenKind::Repeat,
                    "return" => TokenKind::Return,
                    _ => TokenKind::Id(ident),
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number()?,
            Some(ch) => return Err(LexError::UnexpectedChar(ch, pos)),
        };

        Ok(Token::new(kind, pos))
    }

    /// Scan the whole input, including the trailing `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("int bool void struct cin cout if else while repeat return");
    let kinds = [
        TokenKind::Int,
        TokenKind::Bool,
        TokenKind::Void,
        TokenKind::Struct,
        TokenKind::Cin,
        TokenKind::Cout,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Repeat,
        TokenKind::Return,
    ];
    for kind in kinds {
        assert_eq!(lexer.next_token().unwrap().kind, kind);
    }
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_io_operators() {
    let mut lexer = Lexer::new("cin >> x; cout << y;");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Cin);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Read);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Id("x".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Cout);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Write);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Id("y".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
}
