//! Tree-walking evaluator.
//!
//! Walks the AST produced by [`crate::parser`] against an [`Environment`],
//! producing an [`Object`]. There are no exceptions: a runtime failure is an
//! `Object::Error` value that gets checked for and passed up by hand at every
//! multi-operand evaluation site, the same way a `return` value is wrapped
//! and unwrapped by hand rather than unwound by the call stack.

mod builtins;

use crate::ast::expression::{
    CallExpression, FunctionLiteral, IfExpression, InfixExpression, PrefixExpression,
};
use crate::ast::statement::BlockStatement;
use crate::ast::{Expression, Program, Statement};
use crate::environment::Environment;
use crate::object::{FunctionObject, Object, FALSE, NULL, TRUE};
use std::cell::RefCell;
use std::rc::Rc;

/// Evaluates a whole program. A `return` at the top level unwraps to its
/// inner value here; an error short-circuits the remaining statements.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
    match statement {
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.value.clone(), value);
            NULL
        }
        Statement::Return(stmt) => {
            let value = match &stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => NULL,
            };
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Expression(stmt) => eval_expression(&stmt.value, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

/// Unlike [`eval_program`], a `ReturnValue` here is left wrapped so it keeps
/// propagating through nested blocks until it reaches a function call or the
/// program boundary, instead of unwrapping at the first block it passes
/// through.
fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        match &result {
            Object::ReturnValue(_) | Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_expression(expr: &Expression, env: &Rc<RefCell<Environment>>) -> Object {
    match expr {
        Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
        Expression::BooleanLiteral(lit) => native_bool_to_object(lit.value),
        Expression::StringLiteral(lit) => Object::String(lit.value.clone()),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::PrefixExpression(expr) => eval_prefix_expression(expr, env),
        Expression::InfixExpression(expr) => eval_infix_expression(expr, env),
        Expression::IfExpression(expr) => eval_if_expression(expr, env),
        Expression::FunctionLiteral(lit) => eval_function_literal(lit, env),
        Expression::CallExpression(expr) => eval_call_expression(expr, env),
    }
}

fn native_bool_to_object(value: bool) -> Object {
    if value {
        TRUE
    } else {
        FALSE
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Object::Error(format!("Identifier not found: {}", name))
}

fn eval_prefix_expression(expr: &PrefixExpression, env: &Rc<RefCell<Environment>>) -> Object {
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }
    match expr.operator.as_str() {
        "!" => eval_bang_operator(&right),
        "-" => eval_minus_prefix_operator(&right),
        op => Object::Error(format!("Unknown operator: {}{}", op, right.type_name())),
    }
}

fn eval_bang_operator(right: &Object) -> Object {
    native_bool_to_object(!right.is_truthy())
}

fn eval_minus_prefix_operator(right: &Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(-value),
        other => Object::Error(format!("Unknown operator: -{}", other.type_name())),
    }
}

fn eval_infix_expression(expr: &InfixExpression, env: &Rc<RefCell<Environment>>) -> Object {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }

    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(&expr.operator, *l, *r)
        }
        (Object::String(l), Object::String(r)) => {
            eval_string_infix_expression(&expr.operator, l, r)
        }
        _ if left.type_name() != right.type_name() => Object::Error(format!(
            "Type mismatch: {} {} {}",
            left.type_name(),
            expr.operator,
            right.type_name()
        )),
        _ if expr.operator == "==" => native_bool_to_object(left == right),
        _ if expr.operator == "!=" => native_bool_to_object(left != right),
        _ => Object::Error(format!(
            "Unknown operator: {} {} {}",
            left.type_name(),
            expr.operator,
            right.type_name()
        )),
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => {
            if right == 0 {
                Object::Error("Division by zero".to_string())
            } else {
                Object::Integer(left / right)
            }
        }
        "<" => native_bool_to_object(left < right),
        ">" => native_bool_to_object(left > right),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        op => Object::Error(format!("Unknown operator: INTEGER {} INTEGER", op)),
    }
}

fn eval_string_infix_expression(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::String(format!("{}{}", left, right)),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        op => Object::Error(format!("Unknown operator: STRING {} STRING", op)),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Rc<RefCell<Environment>>) -> Object {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL
    }
}

fn eval_function_literal(lit: &FunctionLiteral, env: &Rc<RefCell<Environment>>) -> Object {
    Object::Function(Rc::new(FunctionObject {
        parameters: Rc::from(lit.parameters.clone()),
        body: Rc::new(lit.body.clone()),
        env: Rc::clone(env),
    }))
}

fn eval_call_expression(expr: &CallExpression, env: &Rc<RefCell<Environment>>) -> Object {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let mut args = Vec::with_capacity(expr.arguments.len());
    for arg in &expr.arguments {
        let evaluated = eval_expression(arg, env);
        if evaluated.is_error() {
            return evaluated;
        }
        args.push(evaluated);
    }

    apply_function(&function, &args)
}

fn apply_function(function: &Object, args: &[Object]) -> Object {
    match function {
        Object::Function(func) => {
            if func.parameters.len() != args.len() {
                return Object::Error(format!(
                    "wrong number of arguments: got={}, want={}",
                    args.len(),
                    func.parameters.len()
                ));
            }
            let call_env = Environment::new_enclosed(Rc::clone(&func.env));
            for (param, arg) in func.parameters.iter().zip(args) {
                call_env.borrow_mut().set(param.value.clone(), arg.clone());
            }
            let evaluated = eval_block_statement(&func.body, &call_env);
            unwrap_return_value(evaluated)
        }
        Object::Builtin(builtin) => builtin(args),
        other => Object::Error(format!("not a function: {}", other.type_name())),
    }
}

fn unwrap_return_value(obj: Object) -> Object {
    match obj {
        Object::ReturnValue(value) => *value,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval(input: &str) -> Object {
        let lexer = Lexer::new(input.to_string());
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parser errors: {:?}", parser.errors());
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval("5 + 5 * 2"), Object::Integer(15));
        assert_eq!(eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"), Object::Integer(50));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(eval("7 / 2"), Object::Integer(3));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert_eq!(eval("1 / 0"), Object::Error("Division by zero".to_string()));
    }

    #[test]
    fn test_boolean_and_bang() {
        assert_eq!(eval("true"), TRUE);
        assert_eq!(eval("!true"), FALSE);
        assert_eq!(eval("!!5"), TRUE);
    }

    #[test]
    fn test_minus_prefix_actually_negates() {
        assert_eq!(eval("-5"), Object::Integer(-5));
        assert_eq!(eval("-(-5)"), Object::Integer(5));
    }

    #[test]
    fn test_if_else() {
        assert_eq!(eval("if (true) { 10 }"), Object::Integer(10));
        assert_eq!(eval("if (false) { 10 }"), NULL);
        assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Object::Integer(20));
    }

    #[test]
    fn test_return_propagates_through_nested_blocks() {
        let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_eq!(eval(input), Object::Integer(10));
    }

    #[test]
    fn test_let_statement_binding() {
        assert_eq!(eval("let a = 5; a;"), Object::Integer(5));
        assert_eq!(eval("let a = 5 * 5; a;"), Object::Integer(25));
    }

    #[test]
    fn test_function_application() {
        assert_eq!(eval("let identity = fn(x) { x; }; identity(5);"), Object::Integer(5));
        assert_eq!(
            eval("let add = fn(x, y) { x + y; }; add(5, add(5, 5));"),
            Object::Integer(15)
        );
    }

    #[test]
    fn test_closures_capture_defining_environment() {
        let input = "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(3);";
        assert_eq!(eval(input), Object::Integer(5));
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        let result = eval("let f = fn(x, y) { x + y; }; f(1);");
        assert_eq!(
            result,
            Object::Error("wrong number of arguments: got=1, want=2".to_string())
        );
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            eval(r#""Hello" + " " + "World!""#),
            Object::String("Hello World!".to_string())
        );
    }

    #[test]
    fn test_len_builtin() {
        assert_eq!(eval(r#"len("hello")"#), Object::Integer(5));
    }

    #[test]
    fn test_mixed_type_equality_is_an_error() {
        let result = eval("5 == true");
        match result {
            Object::Error(msg) => assert_eq!(msg, "Type mismatch: INTEGER == BOOLEAN"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_identifier_is_an_error() {
        match eval("foobar") {
            Object::Error(msg) => assert_eq!(msg, "Identifier not found: foobar"),
            other => panic!("expected Error, got {:?}", other),
        }
    }
}
