use crate::ast::operators::{BinOp, UnaryOp};
use crate::ast::tokens::Pos;

/// An identifier with its source position.
///
/// Appears as a leaf everywhere a name can: variable uses, declaration
/// names, struct field names, function names in calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Id {
    pub name: String,
    pub pos: Pos,
}

impl Id {
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Id {
            name: name.into(),
            pos,
        }
    }
}

/// An assignable location: a bare identifier or a chain of field
/// accesses off one.
///
/// Dot chains are left-associative, so `a.b.c` is
/// `Dot(Dot(Id(a), b), c)` - the base of each access is itself a
/// location, never an arbitrary expression. Assignment targets,
/// `cin >>` operands, and `++`/`--` operands are all `Loc`-typed, which
/// keeps "assign to a literal" out of the representable trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Loc {
    /// Bare identifier
    Id(Id),

    /// Field access (`base.field`)
    Dot { base: Box<Loc>, field: Id },
}

impl Loc {
    /// Position of the leftmost identifier in the chain.
    pub fn pos(&self) -> Pos {
        match self {
            Loc::Id(id) => id.pos,
            Loc::Dot { base, .. } => base.pos(),
        }
    }
}

/// An assignment, `target = value`.
///
/// Usable in two contexts: as an expression (nested inside a larger
/// one) and, followed by a semicolon, as a complete statement. Both
/// forms share this node.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub target: Loc,
    pub value: Box<Expr>,
}

/// A function call, `callee(args)`.
///
/// `f()` and a call with an explicit empty argument list both produce
/// an empty `args`; the two spellings are not distinguished in the
/// tree. Shared by the call-expression and call-statement forms.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Id,
    pub args: Vec<Expr>,
}

/// Expression nodes.
///
/// Leaves carry their literal payload and source position; internal
/// nodes own their children outright. Nodes are built bottom-up by the
/// parser and never mutated afterwards - in particular there is no
/// print-time state here; parenthesization context lives in the
/// unparser's recursion.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal
    IntLit { value: i32, pos: Pos },

    /// String literal (payload unescaped, quotes stripped)
    StrLit { value: String, pos: Pos },

    /// `true`
    True(Pos),

    /// `false`
    False(Pos),

    /// A location used as a value
    Loc(Loc),

    /// Assignment used as a value (`a = b` inside a larger expression)
    Assign(AssignExpr),

    /// Function call
    Call(CallExpr),

    /// Unary operation (`-x`, `!x`)
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Binary operation
    ///
    /// Operator and operand order are exactly as parsed; grouping is
    /// encoded in the tree shape, not in any remembered parentheses.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
