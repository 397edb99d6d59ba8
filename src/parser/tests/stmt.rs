//! Statement parsing tests: let, assignment, return, blocks.

use super::*;

fn first_body_stmt(source: &str) -> Stmt {
    let program = parse_ok(source);
    let StmtKind::Fn { body, .. } = program.stmts.into_iter().next().unwrap().kind else {
        panic!("Expected fn declaration");
    };
    let StmtKind::Block(stmts) = body.kind else {
        panic!("Expected block body");
    };
    stmts.into_iter().next().expect("Expected a body statement")
}

#[test]
fn test_let_decl() {
    let stmt = first_body_stmt("fn main(): void { let x: i32 = 5; }");
    match stmt.kind {
        StmtKind::Let {
            name,
            mutable,
            ty,
            init,
        } => {
            assert_eq!(name, "x");
            assert!(!mutable);
            assert_eq!(ty, Type::I32);
            assert!(matches!(
                init.unwrap().kind,
                ExprKind::Literal(Literal::Int(5))
            ));
        }
        other => panic!("Expected let, got {:?}", other),
    }
}

#[test]
fn test_let_mut_decl() {
    let stmt = first_body_stmt("fn main(): void { let mut x: i32 = 0; }");
    match stmt.kind {
        StmtKind::Let { mutable, .. } => assert!(mutable),
        other => panic!("Expected let, got {:?}", other),
    }
}

#[test]
fn test_let_float_decl() {
    let stmt = first_body_stmt("fn main(): void { let pi: f64 = 3.14; }");
    match stmt.kind {
        StmtKind::Let { ty, .. } => assert_eq!(ty, Type::F64),
        other => panic!("Expected let, got {:?}", other),
    }
}

#[test]
fn test_assign_stmt() {
    let stmt = first_body_stmt("fn main(): void { x = x + 1; }");
    match stmt.kind {
        StmtKind::Assign { name, value } => {
            assert_eq!(name, "x");
            assert!(matches!(value.kind, ExprKind::Binary { .. }));
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_equality_is_not_assignment() {
    // `x == 1;` must stay an expression statement.
    let stmt = first_body_stmt("fn main(): void { x == 1; }");
    assert!(matches!(stmt.kind, StmtKind::Expr(_)));
}

#[test]
fn test_bare_return() {
    let stmt = first_body_stmt("fn main(): void { return; }");
    assert!(matches!(stmt.kind, StmtKind::Return(None)));
}

#[test]
fn test_return_with_value() {
    let stmt = first_body_stmt("fn f(): i32 { return 42; }");
    match stmt.kind {
        StmtKind::Return(Some(value)) => {
            assert!(matches!(value.kind, ExprKind::Literal(Literal::Int(42))));
        }
        other => panic!("Expected return with value, got {:?}", other),
    }
}

#[test]
fn test_expr_stmt_call() {
    let stmt = first_body_stmt("fn main(): void { tick(); }");
    match stmt.kind {
        StmtKind::Expr(expr) => assert!(matches!(expr.kind, ExprKind::Call { .. })),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_nested_block() {
    let stmt = first_body_stmt("fn main(): void { { let x: i32 = 1; } }");
    match stmt.kind {
        StmtKind::Block(stmts) => {
            assert_eq!(stmts.len(), 1);
            assert!(matches!(stmts[0].kind, StmtKind::Let { .. }));
        }
        other => panic!("Expected block, got {:?}", other),
    }
}

#[test]
fn test_top_level_let() {
    let program = parse_ok("let counter: i32 = 0;");
    assert_eq!(program.stmts.len(), 1);
    assert!(matches!(program.stmts[0].kind, StmtKind::Let { .. }));
}

#[test]
fn test_top_level_return_parses() {
    // The grammar admits a top-level return; lowering rejects it.
    let program = parse_ok("return;");
    assert!(matches!(program.stmts[0].kind, StmtKind::Return(None)));
}
