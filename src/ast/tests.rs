//! Unit tests for the AST and its pretty-printer.

use super::*;
use crate::token::Literal;

fn int(value: i32, line: usize) -> Expr {
    Expr::new(ExprKind::Literal(Literal::Int(value)), line)
}

#[test]
fn test_type_display() {
    assert_eq!(Type::Void.to_string(), "void");
    assert_eq!(Type::I32.to_string(), "i32");
    assert_eq!(Type::F64.to_string(), "f64");
    assert_eq!(Type::Bool.to_string(), "bool");
    assert_eq!(Type::Str.to_string(), "string");
}

#[test]
fn test_binary_op_display() {
    assert_eq!(BinaryOp::Add.to_string(), "+");
    assert_eq!(BinaryOp::Neq.to_string(), "!=");
    assert_eq!(BinaryOp::Lte.to_string(), "<=");
}

#[test]
fn test_print_empty_program() {
    let program = Program { stmts: vec![] };
    assert_eq!(AstPrinter::print(&program), "Program\n");
}

#[test]
fn test_print_function_with_return() {
    let body = Stmt::new(
        StmtKind::Block(vec![Stmt::new(StmtKind::Return(Some(int(5, 1))), 1)]),
        1,
    );
    let program = Program {
        stmts: vec![Stmt::new(
            StmtKind::Fn {
                name: "answer".to_string(),
                params: vec![FnParam {
                    name: "x".to_string(),
                    ty: Type::I32,
                }],
                return_type: Type::I32,
                body: Box::new(body),
            },
            1,
        )],
    };

    let output = AstPrinter::print(&program);
    assert_eq!(
        output,
        "Program\n  Fn answer(x: i32): i32\n    Block\n      Return\n        Literal 5\n"
    );
}

#[test]
fn test_print_let_and_binary() {
    let init = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(int(1, 1)),
            rhs: Box::new(int(2, 1)),
        },
        1,
    );
    let program = Program {
        stmts: vec![Stmt::new(
            StmtKind::Let {
                name: "x".to_string(),
                mutable: true,
                ty: Type::I32,
                init: Some(init),
            },
            1,
        )],
    };

    let output = AstPrinter::print(&program);
    assert_eq!(
        output,
        "Program\n  Let mut x: i32\n    Binary +\n      Literal 1\n      Literal 2\n"
    );
}

#[test]
fn test_print_call_and_unary() {
    let arg = Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(int(3, 2)),
        },
        2,
    );
    let call = Expr::new(
        ExprKind::Call {
            callee: "f".to_string(),
            args: vec![arg],
        },
        2,
    );
    let program = Program {
        stmts: vec![Stmt::new(StmtKind::Expr(call), 2)],
    };

    let output = AstPrinter::print(&program);
    assert_eq!(
        output,
        "Program\n  ExprStmt\n    Call f\n      Unary -\n        Literal 3\n"
    );
}
