use crate::ast::declarations::Decl;

/// A complete program: an ordered list of top-level declarations.
///
/// This is the unique tree root the parser produces. An empty file is
/// a valid program with an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}
