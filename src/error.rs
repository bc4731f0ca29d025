//! Front-end error type.
//!
//! The scanner and parser each report their own error ([`LexError`],
//! [`ParseError`]); this module unions them for callers that drive the
//! whole pipeline through [`parse_program`](crate::parse_program).
//! Errors are values all the way up - nothing in the library exits the
//! process.

use crate::lexer::LexError;
use crate::parser::ParseError;
use std::fmt;

/// Any error the front end can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Scanner error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "lexical error: {}", e),
            Error::Parse(e) => write!(f, "syntax error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}
