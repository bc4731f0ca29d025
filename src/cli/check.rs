//! Parse and pretty-print C-- sources programmatically.

use super::CliError;
use crate::parser::parse_program;
use crate::unparser::Unparser;

/// Options for the check/unparse operations.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The C-- source text
    pub source: String,
    /// Only validate syntax, don't unparse
    pub syntax_only: bool,
    /// Indentation step for unparsed output (defaults to 4)
    pub tab: Option<usize>,
}

/// Result of a check operation.
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Parsed and re-rendered source text
    Success(String),
}

/// Parse `options.source`; on success either report validity or return
/// the canonical unparsed text.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let program = parse_program(&options.source)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let unparser = match options.tab {
        Some(tab) => Unparser::with_tab(tab),
        None => Unparser::new(),
    };
    Ok(CheckResult::Success(unparser.unparse(&program)))
}
