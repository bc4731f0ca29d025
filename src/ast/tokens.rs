use std::fmt;

/// A 1-based source position.
///
/// Both the scanner and the parser report positions as the line and
/// column of the first character of the token in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(line: usize, col: usize) -> Self {
        Pos { line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A scanned token: a kind plus the position where it started.
///
/// Tokens are immutable records. The payload-carrying kinds
/// ([`TokenKind::Id`], [`TokenKind::IntLiteral`],
/// [`TokenKind::StringLiteral`]) hold the literal value; everything
/// else is identified by kind alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    /// `int` type keyword
    Int,

    /// `bool` type keyword
    Bool,

    /// `void` type keyword (function return type only)
    Void,

    /// `true` literal
    True,

    /// `false` literal
    False,

    /// `struct` keyword
    ///
    /// Introduces both struct declarations and struct-typed variables:
    ///
    /// ```text
    /// struct Point { int x; int y; };
    /// struct Point p;
    /// ```
    Struct,

    /// `cin` keyword (read statements: `cin >> loc;`)
    Cin,

    /// `cout` keyword (write statements: `cout << exp;`)
    Cout,

    /// `if` keyword
    If,

    /// `else` keyword
    Else,

    /// `while` keyword
    While,

    /// `repeat` keyword
    ///
    /// `repeat (exp) { ... }` executes its body `exp` times.
    Repeat,

    /// `return` keyword
    Return,

    // Payload-carrying tokens
    /// Identifier
    ///
    /// Starts with a letter or underscore, continues with letters,
    /// digits, or underscores.
    Id(String),

    /// Integer literal (decimal, fits in an `i32`)
    IntLiteral(i32),

    /// String literal
    ///
    /// The payload is the unescaped text with the surrounding quotes
    /// stripped; the unparser re-escapes on output.
    StringLiteral(String),

    // Two-character operators
    /// `>>` (read operator, follows `cin`)
    Read,

    /// `<<` (write operator, follows `cout`)
    Write,

    /// `++`
    PlusPlus,

    /// `--`
    MinusMinus,

    /// `&&`
    And,

    /// `||`
    Or,

    /// `==`
    Equals,

    /// `!=`
    NotEquals,

    /// `<=`
    LessEq,

    /// `>=`
    GreaterEq,

    // Single-character tokens
    /// `{`
    LCurly,

    /// `}`
    RCurly,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `;`
    Semicolon,

    /// `,`
    Comma,

    /// `.` (struct field access)
    Dot,

    /// `=` (assignment)
    Assign,

    /// `+`
    Plus,

    /// `-` (binary subtraction or unary minus)
    Minus,

    /// `*`
    Times,

    /// `/`
    Divide,

    /// `!` (logical not)
    Not,

    /// `<`
    Less,

    /// `>`
    Greater,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    /// Surface spelling of the token, used in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "int"),
            TokenKind::Bool => write!(f, "bool"),
            TokenKind::Void => write!(f, "void"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Struct => write!(f, "struct"),
            TokenKind::Cin => write!(f, "cin"),
            TokenKind::Cout => write!(f, "cout"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::While => write!(f, "while"),
            TokenKind::Repeat => write!(f, "repeat"),
            TokenKind::Return => write!(f, "return"),
            TokenKind::Id(name) => write!(f, "identifier '{}'", name),
            TokenKind::IntLiteral(n) => write!(f, "integer literal {}", n),
            TokenKind::StringLiteral(s) => write!(f, "string literal \"{}\"", s),
            TokenKind::Read => write!(f, ">>"),
            TokenKind::Write => write!(f, "<<"),
            TokenKind::PlusPlus => write!(f, "++"),
            TokenKind::MinusMinus => write!(f, "--"),
            TokenKind::And => write!(f, "&&"),
            TokenKind::Or => write!(f, "||"),
            TokenKind::Equals => write!(f, "=="),
            TokenKind::NotEquals => write!(f, "!="),
            TokenKind::LessEq => write!(f, "<="),
            TokenKind::GreaterEq => write!(f, ">="),
            TokenKind::LCurly => write!(f, "{{"),
            TokenKind::RCurly => write!(f, "}}"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Assign => write!(f, "="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Times => write!(f, "*"),
            TokenKind::Divide => write!(f, "/"),
            TokenKind::Not => write!(f, "!"),
            TokenKind::Less => write!(f, "<"),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
