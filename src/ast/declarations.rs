use crate::ast::expressions::Id;
use crate::ast::statements::Block;

/// Type descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `void` (function return type only)
    Void,
    /// `struct Name` - a named record type
    Struct(Id),
}

/// A variable declaration, `type name;`.
///
/// Also used for the fields of a struct declaration, which are
/// syntactically ordinary variable declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub name: Id,
}

/// A single formal parameter, `type name`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormalDecl {
    pub ty: Type,
    pub name: Id,
}

/// A function declaration: `type name(formals) { decls stmts }`.
///
/// Every slot is optional. The parser always fills all four; partially
/// built trees (for example, assembled by hand under error recovery in
/// a later pass) may leave slots empty, and the unparser renders a
/// diagnostic placeholder for each missing part rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ret: Option<Type>,
    pub name: Option<Id>,
    pub formals: Option<Vec<FormalDecl>>,
    pub body: Option<Block>,
}

/// A struct declaration, `struct Name { fields };`.
///
/// The body admits only variable declarations, so the field list is
/// `Vec<VarDecl>` rather than a general declaration list.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Id,
    pub fields: Vec<VarDecl>,
}

/// A top-level (or struct-body) declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
    Struct(StructDecl),
}
