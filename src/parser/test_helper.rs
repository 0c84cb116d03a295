//! Assertion helpers shared by the parser's test suite.
//!
//! Kept inside the crate (rather than under `tests/`) so both the unit tests
//! colocated with the parser and the `tests/*.rs` integration tests can use
//! the same helpers.

use super::Parser;
use crate::ast::{expression::Identifier, Expression, Node, Statement};
use crate::lexer::Lexer;

/// Fails the test (pointing at the caller) if the parser recorded any errors.
#[track_caller]
pub fn check_parser_errors(parser: &Parser) {
    let errors = parser.errors();
    if errors.is_empty() {
        return;
    }
    let mut message = format!("parser has {} errors", errors.len());
    for err in errors {
        message.push_str(&format!("\n  - {}", err));
    }
    panic!("{}", message);
}

/// Lexes, parses, and asserts there were no parser errors.
#[track_caller]
pub fn parse_program(input: &str) -> crate::ast::Program {
    let lexer = Lexer::new(input.to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    check_parser_errors(&parser);
    program
}

pub fn test_integer_literal(expr: &Expression, expected: i64) -> bool {
    match expr {
        Expression::IntegerLiteral(lit) => lit.value == expected && lit.token.literal == expected.to_string(),
        _ => false,
    }
}

pub fn test_boolean_literal(expr: &Expression, expected: bool) -> bool {
    matches!(expr, Expression::BooleanLiteral(lit) if lit.value == expected)
}

pub fn test_identifier(expr: &Expression, expected: &str) -> bool {
    matches!(expr, Expression::Identifier(ident) if ident.value == expected && ident.token.literal == expected)
}

/// A literal value expected somewhere in an expression tree, independent of
/// which concrete AST node it ends up as.
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(&'static str),
}

pub fn test_literal_expression(expr: &Expression, expected: Literal) -> bool {
    match expected {
        Literal::Int(v) => test_integer_literal(expr, v),
        Literal::Bool(v) => test_boolean_literal(expr, v),
        Literal::Str(v) => test_identifier(expr, v),
    }
}

pub fn test_infix_expression(expr: &Expression, left: Literal, operator: &str, right: Literal) -> bool {
    match expr {
        Expression::InfixExpression(infix) => {
            test_literal_expression(&infix.left, left)
                && infix.operator == operator
                && test_literal_expression(&infix.right, right)
        }
        _ => false,
    }
}

pub fn test_let_statement(stmt: &Statement, name: &str) -> bool {
    match stmt {
        Statement::Let(let_stmt) => {
            let_stmt.token_literal() == "let" && let_stmt.name.value == name
        }
        _ => false,
    }
}

pub fn let_statement_name(stmt: &Statement) -> Identifier {
    match stmt {
        Statement::Let(let_stmt) => let_stmt.name.clone(),
        other => panic!("expected LetStatement, got {:?}", other),
    }
}

pub fn is_return_statement(stmt: &Statement) -> bool {
    matches!(stmt, Statement::Return(_))
}
