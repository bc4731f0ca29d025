//! AST -> JSON structural dump.
//!
//! A lossless rendering of the tree for tooling and debugging: every
//! node becomes an object with a `"kind"` tag, leaves carry their
//! payload and position, and list children stay in order. This is the
//! `cflat ast` subcommand's output format.

use crate::ast::{
    AssignExpr, Block, CallExpr, Decl, Expr, FnDecl, FormalDecl, Id, Loc, Program, Stmt,
    StructDecl, Type, VarDecl,
};
use serde_json::{Map, Value};

fn node(kind: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("kind".to_string(), Value::String(kind.to_string()));
    map
}

fn id_to_json(id: &Id) -> Value {
    let mut map = node("Id");
    map.insert("name".to_string(), Value::String(id.name.clone()));
    map.insert("line".to_string(), Value::Number(id.pos.line.into()));
    map.insert("col".to_string(), Value::Number(id.pos.col.into()));
    Value::Object(map)
}

fn type_to_json(ty: &Type) -> Value {
    match ty {
        Type::Int => Value::Object(node("IntType")),
        Type::Bool => Value::Object(node("BoolType")),
        Type::Void => Value::Object(node("VoidType")),
        Type::Struct(id) => {
            let mut map = node("StructType");
            map.insert("name".to_string(), id_to_json(id));
            Value::Object(map)
        }
    }
}

fn loc_to_json(loc: &Loc) -> Value {
    match loc {
        Loc::Id(id) => id_to_json(id),
        Loc::Dot { base, field } => {
            let mut map = node("DotAccess");
            map.insert("base".to_string(), loc_to_json(base));
            map.insert("field".to_string(), id_to_json(field));
            Value::Object(map)
        }
    }
}

fn assign_to_json(assign: &AssignExpr) -> Value {
    let mut map = node("Assign");
    map.insert("target".to_string(), loc_to_json(&assign.target));
    map.insert("value".to_string(), expr_to_json(&assign.value));
    Value::Object(map)
}

fn call_to_json(call: &CallExpr) -> Value {
    let mut map = node("Call");
    map.insert("callee".to_string(), id_to_json(&call.callee));
    map.insert(
        "args".to_string(),
        Value::Array(call.args.iter().map(expr_to_json).collect()),
    );
    Value::Object(map)
}

fn expr_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::IntLit { value, pos } => {
            let mut map = node("IntLit");
            map.insert("value".to_string(), Value::Number((*value).into()));
            map.insert("line".to_string(), Value::Number(pos.line.into()));
            map.insert("col".to_string(), Value::Number(pos.col.into()));
            Value::Object(map)
        }
        Expr::StrLit { value, pos } => {
            let mut map = node("StrLit");
            map.insert("value".to_string(), Value::String(value.clone()));
            map.insert("line".to_string(), Value::Number(pos.line.into()));
            map.insert("col".to_string(), Value::Number(pos.col.into()));
            Value::Object(map)
        }
        Expr::True(_) => Value::Object(node("True")),
        Expr::False(_) => Value::Object(node("False")),
        Expr::Loc(loc) => loc_to_json(loc),
        Expr::Assign(assign) => assign_to_json(assign),
        Expr::Call(call) => call_to_json(call),
        Expr::Unary { op, operand } => {
            let mut map = node("Unary");
            map.insert("op".to_string(), Value::String(op.symbol().to_string()));
            map.insert("operand".to_string(), expr_to_json(operand));
            Value::Object(map)
        }
        Expr::Binary { op, left, right } => {
            let mut map = node("Binary");
            map.insert("op".to_string(), Value::String(op.symbol().to_string()));
            map.insert("left".to_string(), expr_to_json(left));
            map.insert("right".to_string(), expr_to_json(right));
            Value::Object(map)
        }
    }
}

fn block_to_json(block: &Block) -> Value {
    let mut map = node("Block");
    map.insert(
        "decls".to_string(),
        Value::Array(block.decls.iter().map(var_decl_to_json).collect()),
    );
    map.insert(
        "stmts".to_string(),
        Value::Array(block.stmts.iter().map(stmt_to_json).collect()),
    );
    Value::Object(map)
}

fn stmt_to_json(stmt: &Stmt) -> Value {
    match stmt {
        Stmt::Assign(assign) => {
            let mut map = node("AssignStmt");
            map.insert("assign".to_string(), assign_to_json(assign));
            Value::Object(map)
        }
        Stmt::PostInc(loc) => {
            let mut map = node("PostIncStmt");
            map.insert("target".to_string(), loc_to_json(loc));
            Value::Object(map)
        }
        Stmt::PostDec(loc) => {
            let mut map = node("PostDecStmt");
            map.insert("target".to_string(), loc_to_json(loc));
            Value::Object(map)
        }
        Stmt::Read(loc) => {
            let mut map = node("ReadStmt");
            map.insert("target".to_string(), loc_to_json(loc));
            Value::Object(map)
        }
        Stmt::Write(exp) => {
            let mut map = node("WriteStmt");
            map.insert("value".to_string(), expr_to_json(exp));
            Value::Object(map)
        }
        Stmt::If { cond, body } => {
            let mut map = node("IfStmt");
            map.insert("cond".to_string(), expr_to_json(cond));
            map.insert("body".to_string(), block_to_json(body));
            Value::Object(map)
        }
        Stmt::IfElse {
            cond,
            then_body,
            else_body,
        } => {
            let mut map = node("IfElseStmt");
            map.insert("cond".to_string(), expr_to_json(cond));
            map.insert("then_body".to_string(), block_to_json(then_body));
            map.insert("else_body".to_string(), block_to_json(else_body));
            Value::Object(map)
        }
        Stmt::While { cond, body } => {
            let mut map = node("WhileStmt");
            map.insert("cond".to_string(), expr_to_json(cond));
            map.insert("body".to_string(), block_to_json(body));
            Value::Object(map)
        }
        Stmt::Repeat { count, body } => {
            let mut map = node("RepeatStmt");
            map.insert("count".to_string(), expr_to_json(count));
            map.insert("body".to_string(), block_to_json(body));
            Value::Object(map)
        }
        Stmt::Call(call) => {
            let mut map = node("CallStmt");
            map.insert("call".to_string(), call_to_json(call));
            Value::Object(map)
        }
        Stmt::Return(exp) => {
            let mut map = node("ReturnStmt");
            map.insert(
                "value".to_string(),
                exp.as_ref().map(expr_to_json).unwrap_or(Value::Null),
            );
            Value::Object(map)
        }
    }
}

fn var_decl_to_json(var: &VarDecl) -> Value {
    let mut map = node("VarDecl");
    map.insert("type".to_string(), type_to_json(&var.ty));
    map.insert("name".to_string(), id_to_json(&var.name));
    Value::Object(map)
}

fn formal_to_json(formal: &FormalDecl) -> Value {
    let mut map = node("FormalDecl");
    map.insert("type".to_string(), type_to_json(&formal.ty));
    map.insert("name".to_string(), id_to_json(&formal.name));
    Value::Object(map)
}

fn fn_decl_to_json(func: &FnDecl) -> Value {
    let mut map = node("FnDecl");
    map.insert(
        "return_type".to_string(),
        func.ret.as_ref().map(type_to_json).unwrap_or(Value::Null),
    );
    map.insert(
        "name".to_string(),
        func.name.as_ref().map(id_to_json).unwrap_or(Value::Null),
    );
    map.insert(
        "formals".to_string(),
        func.formals
            .as_ref()
            .map(|formals| Value::Array(formals.iter().map(formal_to_json).collect()))
            .unwrap_or(Value::Null),
    );
    map.insert(
        "body".to_string(),
        func.body.as_ref().map(block_to_json).unwrap_or(Value::Null),
    );
    Value::Object(map)
}

fn struct_decl_to_json(st: &StructDecl) -> Value {
    let mut map = node("StructDecl");
    map.insert("name".to_string(), id_to_json(&st.name));
    map.insert(
        "fields".to_string(),
        Value::Array(st.fields.iter().map(var_decl_to_json).collect()),
    );
    Value::Object(map)
}

fn decl_to_json(decl: &Decl) -> Value {
    match decl {
        Decl::Var(var) => var_decl_to_json(var),
        Decl::Fn(func) => fn_decl_to_json(func),
        Decl::Struct(st) => struct_decl_to_json(st),
    }
}

/// Convert a parsed program to a JSON tree.
pub fn ast_to_json(program: &Program) -> Value {
    let mut map = node("Program");
    map.insert(
        "decls".to_string(),
        Value::Array(program.decls.iter().map(decl_to_json).collect()),
    );
    Value::Object(map)
}
