pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod unparser;

pub use ast::{
    AssignExpr, BinOp, Block, CallExpr, Decl, Expr, FnDecl, FormalDecl, Id, Loc, Pos, Program,
    Stmt, StructDecl, Token, TokenKind, Type, UnaryOp, VarDecl,
};
pub use error::Error;
pub use lexer::{LexError, Lexer};
pub use parser::{parse_program, ParseError, Parser};
pub use unparser::{unparse, Unparser};
