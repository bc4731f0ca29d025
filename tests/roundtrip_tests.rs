// Round-trip tests
//
// The printer makes grouping explicit, so its output is canonical: for
// any valid program, parsing the printed form and printing again must
// reproduce the same text. Printing reads nothing but tree structure
// (source positions do not influence it), so a text fixpoint is
// equivalent to structural equality of the re-parsed tree.

use cflat_lang::ast::{BinOp, Decl, Expr, Loc, Stmt};
use cflat_lang::parser::parse_program;
use cflat_lang::unparser::unparse;
use cflat_lang::{Error, Program};

fn canon(source: &str) -> String {
    unparse(&parse_program(source).unwrap())
}

fn assert_roundtrip(source: &str) {
    let once = canon(source);
    let twice = canon(&once);
    assert_eq!(once, twice, "printed form is not a fixpoint for:\n{}", source);
}

fn reparse(source: &str) -> Program {
    parse_program(&canon(source)).unwrap()
}

fn first_fn_stmts(program: &Program) -> &[Stmt] {
    match &program.decls[0] {
        Decl::Fn(func) => &func.body.as_ref().unwrap().stmts,
        other => panic!("expected a function, got {:?}", other),
    }
}

// ============================================================================
// Round-trip stability
// ============================================================================

#[test]
fn roundtrip_minimal_program() {
    assert_roundtrip("int f() { }");
}

#[test]
fn roundtrip_globals_and_struct() {
    assert_roundtrip(
        "int count;\n\
         bool ready;\n\
         struct Point {\n\
             int x;\n\
             int y;\n\
         };\n\
         struct Point origin;\n",
    );
}

#[test]
fn roundtrip_every_statement_kind() {
    assert_roundtrip(
        "void run(int n) {\n\
             int i;\n\
             struct Point p;\n\
             i = 0;\n\
             p.x = n;\n\
             i++;\n\
             i--;\n\
             cin >> p.y;\n\
             cout << p.x + p.y;\n\
             if (i < n) { i = n; }\n\
             if (i == n) { } else { i = 0; }\n\
             while (i > 0) { i--; }\n\
             repeat (n) { tick(); }\n\
             log(i, n);\n\
             return;\n\
         }\n",
    );
}

#[test]
fn roundtrip_every_operator() {
    assert_roundtrip(
        "bool f(int a, int b) {\n\
             return a + b - a * b / a < b || a <= b && a > b || a >= b || a == b || a != b;\n\
         }\n",
    );
}

#[test]
fn roundtrip_unary_and_nested_parens() {
    assert_roundtrip("int f(int a) { return -a * !true + -(-a); }");
}

#[test]
fn roundtrip_string_escapes() {
    assert_roundtrip("void f() { cout << \"line\\none\\ttab \\\"quoted\\\" back\\\\slash\"; }");
}

#[test]
fn roundtrip_nested_assignments() {
    assert_roundtrip("void f() { x = y = z = 0; a = (b = c) + 1; }");
}

#[test]
fn roundtrip_dangling_else() {
    assert_roundtrip("void f() { if (x) { if (y) { a(); } } else { b(); } }");
}

#[test]
fn roundtrip_nested_control_flow() {
    assert_roundtrip(
        "int gcd(int a, int b) {\n\
             while (b != 0) {\n\
                 int t;\n\
                 t = b;\n\
                 b = a - a / b * b;\n\
                 a = t;\n\
             }\n\
             return a;\n\
         }\n",
    );
}

#[test]
fn roundtrip_already_canonical_text_is_identity() {
    let once = canon("int f() { return (1 + 2) * 3; }");
    assert_eq!(canon(&once), once);
    // and once more for good measure
    assert_eq!(canon(&canon(&once)), once);
}

// ============================================================================
// Grouping survives the trip
// ============================================================================

#[test]
fn left_associativity_preserved() {
    // a - b - c stays (a - b) - c after print + reparse
    let program = reparse("int f() { return a - b - c; }");
    match &first_fn_stmts(&program)[0] {
        Stmt::Return(Some(Expr::Binary {
            op: BinOp::Minus,
            left,
            right,
        })) => {
            assert!(matches!(
                **left,
                Expr::Binary {
                    op: BinOp::Minus,
                    ..
                }
            ));
            assert!(matches!(**right, Expr::Loc(_)));
        }
        other => panic!("expected subtraction at the root, got {:?}", other),
    }
}

#[test]
fn precedence_preserved() {
    // a + b * c keeps the multiplication on the right
    let program = reparse("int f() { return a + b * c; }");
    match &first_fn_stmts(&program)[0] {
        Stmt::Return(Some(Expr::Binary {
            op: BinOp::Plus,
            right,
            ..
        })) => {
            assert!(matches!(
                **right,
                Expr::Binary {
                    op: BinOp::Times,
                    ..
                }
            ));
        }
        other => panic!("expected addition at the root, got {:?}", other),
    }
}

#[test]
fn equality_grouping_preserved() {
    // The extra forced parentheses around the right operand of == must
    // not change what the text parses back to
    let program = reparse("void f() { x = a == b + c; }");
    match &first_fn_stmts(&program)[0] {
        Stmt::Assign(assign) => match assign.value.as_ref() {
            Expr::Binary {
                op: BinOp::Equals,
                right,
                ..
            } => {
                assert!(matches!(
                    **right,
                    Expr::Binary {
                        op: BinOp::Plus,
                        ..
                    }
                ));
            }
            other => panic!("expected == at the root, got {:?}", other),
        },
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn dot_chain_prints_verbatim() {
    let text = canon("void f() { cin >> a.b.c; }");
    assert!(text.contains("cin >> a.b.c;"));

    // and the reparsed chain is still left-associated
    let program = reparse("void f() { cin >> a.b.c; }");
    match &first_fn_stmts(&program)[0] {
        Stmt::Read(Loc::Dot { base, field }) => {
            assert_eq!(field.name, "c");
            assert!(matches!(**base, Loc::Dot { .. }));
        }
        other => panic!("expected a dot chain, got {:?}", other),
    }
}

#[test]
fn else_attachment_preserved() {
    let program = reparse("void f() { if (x) { if (y) { } } else { } }");
    match &first_fn_stmts(&program)[0] {
        Stmt::IfElse { then_body, .. } => {
            assert!(matches!(&then_body.stmts[0], Stmt::If { .. }));
        }
        other => panic!("expected if/else at the top, got {:?}", other),
    }
}

#[test]
fn empty_body_survives() {
    let program = reparse("int f() { }");
    match &program.decls[0] {
        Decl::Fn(func) => {
            let body = func.body.as_ref().unwrap();
            assert!(body.decls.is_empty());
            assert!(body.stmts.is_empty());
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn argument_order_preserved() {
    let program = reparse("void f() { g(1, 2, 3); }");
    match &first_fn_stmts(&program)[0] {
        Stmt::Call(call) => {
            let values: Vec<i32> = call
                .args
                .iter()
                .map(|arg| match arg {
                    Expr::IntLit { value, .. } => *value,
                    other => panic!("expected an int literal, got {:?}", other),
                })
                .collect();
            assert_eq!(values, vec![1, 2, 3]);
        }
        other => panic!("expected a call, got {:?}", other),
    }
}

// ============================================================================
// Failure surface
// ============================================================================

#[test]
fn malformed_input_is_fatal() {
    // a missing brace yields a syntax error, never a partial tree
    assert!(matches!(
        parse_program("int main() { x = 1;"),
        Err(Error::Parse(_))
    ));

    assert!(matches!(
        parse_program("int main() { x = ; }"),
        Err(Error::Parse(_))
    ));

    assert!(matches!(parse_program("\"stray\""), Err(Error::Parse(_))));
}
