//! CLI support for cflat-lang
//!
//! Provides programmatic access to the `cflat` CLI's functionality for
//! embedding in other tools (build wrappers, graders, editors).

mod check;
mod convert;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::ast_to_json;

use crate::error::Error;
use crate::lexer::LexError;
use crate::parser::ParseError;
use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Scanner error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Lex(e) => write!(f, "Lexical error: {}", e),
            CliError::Parse(e) => write!(f, "Syntax error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass a file or pipe source to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lex(e) => Some(e),
            CliError::Parse(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for CliError {
    fn from(e: LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<Error> for CliError {
    fn from(e: Error) -> Self {
        match e {
            Error::Lex(e) => CliError::Lex(e),
            Error::Parse(e) => CliError::Parse(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
