//! Source renderer for the C-- AST.
//!
//! A single depth-first, left-to-right walk that turns any well-formed
//! tree back into parseable source text. Grouping is made explicit by
//! construction: every binary expression wraps itself in parentheses,
//! so the printed text re-parses to a tree with identical evaluation
//! order regardless of how the original source was written.
//!
//! Parenthesization context flows downward as an explicit `forced`
//! parameter rather than as state on the nodes; the only producer of
//! `forced = true` is the `==` operator, which demands one extra
//! enclosing pair around its right operand whatever its kind.

use crate::ast::{
    AssignExpr, BinOp, Block, CallExpr, Decl, Expr, FnDecl, FormalDecl, Loc, Program, Stmt,
    StructDecl, Type, UnaryOp, VarDecl,
};

/// Default indentation step, in columns.
const TAB: usize = 4;

pub struct Unparser {
    tab: usize,
}

impl Default for Unparser {
    fn default() -> Self {
        Unparser::new()
    }
}

impl Unparser {
    pub fn new() -> Self {
        Unparser { tab: TAB }
    }

    /// Use a custom indentation step.
    pub fn with_tab(tab: usize) -> Self {
        Unparser { tab }
    }

    /// Render a whole program starting at column zero.
    pub fn unparse(&self, program: &Program) -> String {
        let mut out = String::new();
        for decl in &program.decls {
            self.write_decl(&mut out, decl, 0);
        }
        out
    }

    /// Render a single statement at the given indent. Mostly useful in
    /// tests and diagnostics.
    pub fn unparse_stmt(&self, stmt: &Stmt, indent: usize) -> String {
        let mut out = String::new();
        self.write_stmt(&mut out, stmt, indent);
        out
    }

    /// Render a single expression.
    pub fn unparse_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, expr, false);
        out
    }

    // Declarations

    fn write_decl(&self, out: &mut String, decl: &Decl, indent: usize) {
        match decl {
            Decl::Var(var) => self.write_var_decl(out, var, indent),
            Decl::Fn(func) => self.write_fn_decl(out, func, indent),
            Decl::Struct(st) => self.write_struct_decl(out, st, indent),
        }
    }

    fn write_var_decl(&self, out: &mut String, var: &VarDecl, indent: usize) {
        self.write_indent(out, indent);
        self.write_type(out, &var.ty);
        out.push(' ');
        out.push_str(&var.name.name);
        out.push_str(";\n");
    }

    fn write_fn_decl(&self, out: &mut String, func: &FnDecl, indent: usize) {
        self.write_indent(out, indent);

        // Partially built declarations print a placeholder for each
        // missing slot instead of failing.
        match &func.ret {
            Some(ty) => self.write_type(out, ty),
            None => out.push_str("type is null"),
        }
        out.push(' ');
        match &func.name {
            Some(id) => out.push_str(&id.name),
            None => out.push_str("id is null "),
        }
        match &func.formals {
            Some(formals) => self.write_formals(out, formals),
            None => out.push_str("list is null"),
        }
        out.push(' ');
        match &func.body {
            Some(body) => self.write_block(out, body, indent),
            None => out.push_str("body is null"),
        }
        out.push('\n');
    }

    fn write_formals(&self, out: &mut String, formals: &[FormalDecl]) {
        out.push('(');
        for (i, formal) in formals.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, &formal.ty);
            out.push(' ');
            out.push_str(&formal.name.name);
        }
        out.push(')');
    }

    fn write_struct_decl(&self, out: &mut String, st: &StructDecl, indent: usize) {
        self.write_indent(out, indent);
        out.push_str("struct ");
        out.push_str(&st.name.name);
        out.push_str(" {\n");
        for field in &st.fields {
            self.write_var_decl(out, field, indent + self.tab);
        }
        self.write_indent(out, indent);
        out.push_str("};\n");
    }

    fn write_type(&self, out: &mut String, ty: &Type) {
        match ty {
            Type::Int => out.push_str("int"),
            Type::Bool => out.push_str("bool"),
            Type::Void => out.push_str("void"),
            Type::Struct(id) => {
                out.push_str("struct ");
                out.push_str(&id.name);
            }
        }
    }

    // Statements

    /// `{` ... `}` with the body one tab stop deeper and the closing
    /// brace aligned to the construct that opened the block. No
    /// trailing newline: the caller decides what follows the brace.
    fn write_block(&self, out: &mut String, block: &Block, indent: usize) {
        out.push_str("{\n");
        for decl in &block.decls {
            self.write_var_decl(out, decl, indent + self.tab);
        }
        for stmt in &block.stmts {
            self.write_stmt(out, stmt, indent + self.tab);
        }
        self.write_indent(out, indent);
        out.push('}');
    }

    fn write_stmt(&self, out: &mut String, stmt: &Stmt, indent: usize) {
        self.write_indent(out, indent);
        match stmt {
            Stmt::Assign(assign) => {
                self.write_assign(out, assign);
                out.push_str(";\n");
            }
            Stmt::PostInc(loc) => {
                self.write_loc(out, loc);
                out.push_str("++;\n");
            }
            Stmt::PostDec(loc) => {
                self.write_loc(out, loc);
                out.push_str("--;\n");
            }
            Stmt::Read(loc) => {
                out.push_str("cin >> ");
                self.write_loc(out, loc);
                out.push_str(";\n");
            }
            Stmt::Write(exp) => {
                out.push_str("cout << ");
                self.write_expr(out, exp, false);
                out.push_str(";\n");
            }
            Stmt::If { cond, body } => {
                out.push_str("if (");
                self.write_expr(out, cond, false);
                out.push_str(") ");
                self.write_block(out, body, indent);
                out.push('\n');
            }
            Stmt::IfElse {
                cond,
                then_body,
                else_body,
            } => {
                out.push_str("if (");
                self.write_expr(out, cond, false);
                out.push_str(") ");
                self.write_block(out, then_body, indent);
                out.push_str(" else ");
                self.write_block(out, else_body, indent);
                out.push('\n');
            }
            Stmt::While { cond, body } => {
                out.push_str("while (");
                self.write_expr(out, cond, false);
                out.push_str(") ");
                self.write_block(out, body, indent);
                out.push('\n');
            }
            Stmt::Repeat { count, body } => {
                out.push_str("repeat (");
                self.write_expr(out, count, false);
                out.push_str(") ");
                self.write_block(out, body, indent);
                out.push('\n');
            }
            Stmt::Call(call) => {
                self.write_call(out, call);
                out.push_str(";\n");
            }
            Stmt::Return(exp) => {
                out.push_str("return");
                if let Some(exp) = exp {
                    out.push(' ');
                    self.write_expr(out, exp, false);
                }
                out.push_str(";\n");
            }
        }
    }

    // Expressions

    /// Render one expression. `forced` is the ancestor's demand for an
    /// enclosing pair of parentheses; it applies to this node only and
    /// never propagates into the children.
    fn write_expr(&self, out: &mut String, expr: &Expr, forced: bool) {
        if forced {
            out.push('(');
        }
        match expr {
            Expr::IntLit { value, .. } => {
                out.push_str(&value.to_string());
            }
            Expr::StrLit { value, .. } => {
                out.push('"');
                out.push_str(&escape_string(value));
                out.push('"');
            }
            Expr::True(_) => out.push_str("true"),
            Expr::False(_) => out.push_str("false"),
            Expr::Loc(loc) => self.write_loc(out, loc),
            Expr::Assign(assign) => {
                // Assignment binds loosest, so as an operand it must
                // carry its own parentheses to re-parse in place.
                out.push('(');
                self.write_assign(out, assign);
                out.push(')');
            }
            Expr::Call(call) => self.write_call(out, call),
            Expr::Unary { op, operand } => {
                out.push_str(op.symbol());
                // Adjacent minus signs would re-lex as `--`.
                let sep = *op == UnaryOp::Neg
                    && (matches!(
                        operand.as_ref(),
                        Expr::Unary {
                            op: UnaryOp::Neg,
                            ..
                        }
                    ) || matches!(operand.as_ref(), Expr::IntLit { value, .. } if *value < 0));
                self.write_expr(out, operand, sep);
            }
            Expr::Binary { op, left, right } => {
                // A binary node always parenthesizes itself, and `==`
                // additionally forces a pair around its right operand.
                out.push('(');
                self.write_expr(out, left, false);
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                self.write_expr(out, right, *op == BinOp::Equals);
                out.push(')');
            }
        }
        if forced {
            out.push(')');
        }
    }

    fn write_loc(&self, out: &mut String, loc: &Loc) {
        match loc {
            Loc::Id(id) => out.push_str(&id.name),
            Loc::Dot { base, field } => {
                self.write_loc(out, base);
                out.push('.');
                out.push_str(&field.name);
            }
        }
    }

    fn write_assign(&self, out: &mut String, assign: &AssignExpr) {
        self.write_loc(out, &assign.target);
        out.push_str(" = ");
        self.write_expr(out, &assign.value, false);
    }

    fn write_call(&self, out: &mut String, call: &CallExpr) {
        out.push_str(&call.callee.name);
        out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_expr(out, arg, false);
        }
        out.push(')');
    }

    fn write_indent(&self, out: &mut String, indent: usize) {
        for _ in 0..indent {
            out.push(' ');
        }
    }
}

/// Escape a string literal payload so the printed form re-lexes to the
/// same text.
fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}

// Convenience function

/// Render `program` with the default tab width.
pub fn unparse(program: &Program) -> String {
    Unparser::new().unparse(program)
}
