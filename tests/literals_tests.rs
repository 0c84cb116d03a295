use monkey_lang::ast::{expression::Expression, statement::Statement};
use monkey_lang::lexer::Lexer;
use monkey_lang::parser::test_helper::{check_parser_errors, test_literal_expression, Literal};
use monkey_lang::parser::Parser;

fn parse_single_expression(input: &str) -> Expression {
    let l = Lexer::new(input.to_string());
    let mut p = Parser::new(l);
    let program = p.parse_program();
    check_parser_errors(&p);
    assert_eq!(program.statements.len(), 1);

    match program.statements.into_iter().next().unwrap() {
        Statement::Expression(expr_stmt) => expr_stmt.value,
        other => panic!("statement is not an ExpressionStatement. got={:?}", other),
    }
}

#[test]
fn test_boolean_literal_true() {
    let expr = parse_single_expression("true;");
    assert!(test_literal_expression(&expr, Literal::Bool(true)));
}

#[test]
fn test_boolean_literal_false() {
    let expr = parse_single_expression("false;");
    assert!(test_literal_expression(&expr, Literal::Bool(false)));
}

#[test]
fn test_integer_literal_max_i64() {
    let expr = parse_single_expression("9223372036854775807;");
    assert!(test_literal_expression(&expr, Literal::Int(i64::MAX)));
}

#[test]
fn test_grouped_expression_overrides_precedence() {
    let expr = parse_single_expression("(5 + 5) * 2;");
    match expr {
        Expression::InfixExpression(infix) => {
            assert_eq!(infix.operator, "*");
            assert!(test_literal_expression(&infix.left, Literal::Int(5)) || matches!(&*infix.left, Expression::InfixExpression(_)));
        }
        other => panic!("expr is not an InfixExpression. got={:?}", other),
    }
}
