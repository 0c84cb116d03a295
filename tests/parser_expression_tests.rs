use monkey_lang::ast::{expression::Expression, statement::Statement, Node};
use monkey_lang::lexer::Lexer;
use monkey_lang::parser::test_helper::{
    check_parser_errors, test_identifier, test_infix_expression, test_integer_literal,
    test_literal_expression, Literal,
};
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
fn test_parsing_identifier_expression() {
    let expr = parse_single_expression("foobar;");
    let ident = match &expr {
        Expression::Identifier(ident) => ident,
        _ => panic!("expr is not an Identifier. got={:?}", expr),
    };
    assert_eq!(ident.value, "foobar");
    assert_eq!(ident.token_literal(), "foobar");
}

#[test]
fn test_parsing_integer_literal_expression() {
    let expr = parse_single_expression("5;");
    assert!(test_integer_literal(&expr, 5));
}

#[test]
fn test_parsing_string_literal_expression() {
    let expr = parse_single_expression(r#""hello world";"#);
    match expr {
        Expression::StringLiteral(lit) => assert_eq!(lit.value, "hello world"),
        other => panic!("expr is not a StringLiteral. got={:?}", other),
    }
}

#[test]
fn test_parsing_expression_statement_without_trailing_semicolon() {
    // The trailing semicolon is optional; `5` alone is a complete program.
    let l = Lexer::new("5".to_string());
    let mut p = Parser::new(l);
    let program = p.parse_program();
    check_parser_errors(&p);
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_parsing_prefix_expressions() {
    let prefix_tests: Vec<(&str, &str, i64)> = vec![("!5;", "!", 5), ("-15;", "-", 15)];

    for (input, expected_operator, expected_value) in prefix_tests {
        let expr = parse_single_expression(input);
        let prefix_expr = match &expr {
            Expression::PrefixExpression(pe) => pe,
            _ => panic!("expr is not a PrefixExpression. got={:?}", expr),
        };
        assert_eq!(prefix_expr.operator, expected_operator);
        assert!(test_integer_literal(&prefix_expr.right, expected_value));
    }
}

#[test]
fn test_parsing_prefix_expressions_on_identifiers() {
    let prefix_tests: Vec<(&str, &str, &str)> = vec![("!foobar;", "!", "foobar"), ("-foobar;", "-", "foobar")];

    for (input, expected_operator, expected_value) in prefix_tests {
        let expr = parse_single_expression(input);
        let prefix_expr = match &expr {
            Expression::PrefixExpression(pe) => pe,
            _ => panic!("expr is not a PrefixExpression. got={:?}", expr),
        };
        assert_eq!(prefix_expr.operator, expected_operator);
        assert!(test_identifier(&prefix_expr.right, expected_value));
    }
}

#[test]
fn test_parsing_infix_expressions() {
    let infix_tests: Vec<(&str, i64, &str, i64)> = vec![
        ("5 + 5;", 5, "+", 5),
        ("5 - 5;", 5, "-", 5),
        ("5 * 5;", 5, "*", 5),
        ("5 / 5;", 5, "/", 5),
        ("5 > 5;", 5, ">", 5),
        ("5 < 5;", 5, "<", 5),
        ("5 == 5;", 5, "==", 5),
        ("5 != 5;", 5, "!=", 5),
    ];

    for (input, left, operator, right) in infix_tests {
        let expr = parse_single_expression(input);
        assert!(test_infix_expression(
            &expr,
            Literal::Int(left),
            operator,
            Literal::Int(right)
        ));
    }
}

#[test]
fn test_parsing_if_expression() {
    let expr = parse_single_expression("if (x < y) { x }");
    let if_expr = match &expr {
        Expression::IfExpression(if_expr) => if_expr,
        _ => panic!("expr is not an IfExpression. got={:?}", expr),
    };

    assert!(test_infix_expression(
        &if_expr.condition,
        Literal::Str("x"),
        "<",
        Literal::Str("y")
    ));

    assert_eq!(if_expr.consequence.statements.len(), 1);
    let consequence_expr = match &if_expr.consequence.statements[0] {
        Statement::Expression(expr_stmt) => &expr_stmt.value,
        other => panic!("consequence statement is not an ExpressionStatement. got={:?}", other),
    };
    assert!(test_identifier(consequence_expr, "x"));
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_parsing_if_else_expression() {
    let expr = parse_single_expression("if (x < y) { x } else { y }");
    let if_expr = match &expr {
        Expression::IfExpression(if_expr) => if_expr,
        _ => panic!("expr is not an IfExpression. got={:?}", expr),
    };

    let alternative = if_expr
        .alternative
        .as_ref()
        .expect("alternative should be Some");
    assert_eq!(alternative.statements.len(), 1);
    let alt_expr = match &alternative.statements[0] {
        Statement::Expression(expr_stmt) => &expr_stmt.value,
        other => panic!("alternative statement is not an ExpressionStatement. got={:?}", other),
    };
    assert!(test_identifier(alt_expr, "y"));
}

#[test]
fn test_parsing_function_literal() {
    let expr = parse_single_expression("fn(x, y) { x + y; }");
    let func_lit = match &expr {
        Expression::FunctionLiteral(func_lit) => func_lit,
        _ => panic!("expr is not a FunctionLiteral. got={:?}", expr),
    };

    assert_eq!(func_lit.parameters.len(), 2);
    assert_eq!(func_lit.parameters[0].value, "x");
    assert_eq!(func_lit.parameters[1].value, "y");

    assert_eq!(func_lit.body.statements.len(), 1);
    let body_expr = match &func_lit.body.statements[0] {
        Statement::Expression(expr_stmt) => &expr_stmt.value,
        other => panic!("body statement is not an ExpressionStatement. got={:?}", other),
    };
    assert!(test_infix_expression(
        body_expr,
        Literal::Str("x"),
        "+",
        Literal::Str("y")
    ));
}

#[test]
fn test_parsing_function_literal_with_no_parameters() {
    let expr = parse_single_expression("fn() { true; }");
    let func_lit = match &expr {
        Expression::FunctionLiteral(func_lit) => func_lit,
        _ => panic!("expr is not a FunctionLiteral. got={:?}", expr),
    };
    assert!(func_lit.parameters.is_empty());
}

#[test]
fn test_parsing_call_expression() {
    let expr = parse_single_expression("add(1, 2 * 3, 4 + 5);");
    let call_expr = match &expr {
        Expression::CallExpression(ce) => ce,
        _ => panic!("expr is not a CallExpression. got={:?}", expr),
    };

    assert!(test_identifier(&call_expr.function, "add"));
    assert_eq!(call_expr.arguments.len(), 3);

    assert!(test_literal_expression(&call_expr.arguments[0], Literal::Int(1)));
    assert!(test_infix_expression(
        &call_expr.arguments[1],
        Literal::Int(2),
        "*",
        Literal::Int(3)
    ));
    assert!(test_infix_expression(
        &call_expr.arguments[2],
        Literal::Int(4),
        "+",
        Literal::Int(5)
    ));
}

#[test]
fn test_parsing_call_expression_with_no_arguments() {
    let expr = parse_single_expression("noop();");
    let call_expr = match &expr {
        Expression::CallExpression(ce) => ce,
        _ => panic!("expr is not a CallExpression. got={:?}", expr),
    };
    assert!(call_expr.arguments.is_empty());
}
