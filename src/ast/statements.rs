use crate::ast::declarations::VarDecl;
use crate::ast::expressions::{AssignExpr, CallExpr, Expr, Loc};

/// A brace-delimited body: zero or more variable declarations followed
/// by zero or more statements.
///
/// Declarations strictly precede statements - the grammar admits no
/// interleaving. Function bodies and the bodies of `if`/`else`/
/// `while`/`repeat` all use this one container. Both lists may be
/// empty; `int f() { }` has a body with two zero-length lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `loc = exp;`
    Assign(AssignExpr),

    /// `loc++;`
    PostInc(Loc),

    /// `loc--;`
    PostDec(Loc),

    /// `cin >> loc;`
    Read(Loc),

    /// `cout << exp;`
    Write(Expr),

    /// `if (exp) { ... }`
    If { cond: Expr, body: Block },

    /// `if (exp) { ... } else { ... }`
    ///
    /// Only constructed when an `else` clause is present; the clause
    /// always belongs to the nearest unmatched `if`.
    IfElse {
        cond: Expr,
        then_body: Block,
        else_body: Block,
    },

    /// `while (exp) { ... }`
    While { cond: Expr, body: Block },

    /// `repeat (exp) { ... }`
    Repeat { count: Expr, body: Block },

    /// `f(args);`
    Call(CallExpr),

    /// `return;` or `return exp;`
    Return(Option<Expr>),
}
