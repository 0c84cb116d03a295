//! Pratt parser that turns a token stream into an Abstract Syntax Tree (AST).
//!
//! Parsing approach:
//! - Maintains a two-token lookahead (`curr_token`, `peek_token`).
//! - Looks up a prefix parse function for the current token, then loops over
//!   infix parse functions as long as the next operator binds tighter than
//!   the precedence passed in (operator-precedence / Pratt parsing).
//! - Reports user-friendly errors via the `errors` vector rather than
//!   aborting on the first syntax error, so a whole program's worth of
//!   mistakes can be reported in one pass.

pub mod error;
mod precedence;
pub mod test_helper;

use crate::ast::{
    expression::{
        BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
        InfixExpression, IntegerLiteral, PrefixExpression, StringLiteral,
    },
    statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    Expression, Program, Statement,
};
use crate::lexer::{
    token::{Token, TokenType},
    Lexer,
};
use crate::parser::error::ParserError;
use precedence::Precedence;
use std::collections::HashMap;

/// A parser that converts tokens from a lexer into an Abstract Syntax Tree (AST).
pub struct Parser {
    l: Lexer,
    curr_token: Token,
    peek_token: Token,
    pub errors: Vec<ParserError>,
    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

impl Parser {
    /// Creates a new parser and primes the two-token lookahead buffer.
    pub fn new(l: Lexer) -> Self {
        let mut p = Parser {
            l,
            curr_token: Token::default(),
            peek_token: Token::default(),
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        p.register_prefix_parse_fn(TokenType::IDENT, Parser::parse_identifier);
        p.register_prefix_parse_fn(TokenType::INT, Parser::parse_integer_literal);
        p.register_prefix_parse_fn(TokenType::STRING, Parser::parse_string_literal);
        p.register_prefix_parse_fn(TokenType::BANG, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::MINUS, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::TRUE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::FALSE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::LPAREN, Parser::parse_grouped_expression);
        p.register_prefix_parse_fn(TokenType::IF, Parser::parse_if_expression);
        p.register_prefix_parse_fn(TokenType::FUNCTION, Parser::parse_function_literal);

        p.register_infix_parse_fn(TokenType::PLUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::MINUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::SLASH, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::ASTERISK, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::EQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::NOTEQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::GT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LPAREN, Parser::parse_call_expression);

        p.next_token();
        p.next_token();
        p
    }

    fn next_token(&mut self) {
        self.curr_token = self.peek_token.clone();
        self.peek_token = self.l.next_token();
    }

    fn is_curr_token(&self, token_type: TokenType) -> bool {
        self.curr_token.token_type == token_type
    }

    fn is_peek_token(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    /// Advances past the peek token if it matches, else records an error.
    fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.is_peek_token(token_type) {
            self.next_token();
            true
        } else {
            self.display_peek_error(token_type);
            false
        }
    }

    fn display_peek_error(&mut self, expected: TokenType) {
        let error = ParserError::at_token(
            &self.peek_token,
            format!(
                "expected token to be {:?}, got {:?}",
                expected, self.peek_token.token_type
            ),
        );
        log::error!("{}", error);
        self.errors.push(error);
    }

    fn no_prefix_parse_function_error(&mut self) {
        let error = ParserError::at_token(
            &self.curr_token,
            format!(
                "no prefix parse function for {:?}",
                self.curr_token.token_type
            ),
        );
        log::error!("{}", error);
        self.errors.push(error);
    }

    fn register_prefix_parse_fn(&mut self, token_type: TokenType, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, parse_fn);
    }

    fn register_infix_parse_fn(&mut self, token_type: TokenType, parse_fn: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, parse_fn);
    }

    pub fn errors(&self) -> &Vec<ParserError> {
        &self.errors
    }

    /// Parses the entire program. A statement that fails to parse is skipped
    /// (with an error recorded) so later statements still get a chance.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.curr_token.token_type != TokenType::EOF {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.token_type {
            TokenType::LET => self.parse_let_statement().map(Statement::Let),
            TokenType::RETURN => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `let <identifier> = <expression>;` — the trailing semicolon is optional.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::IDENT) {
            return None;
        }
        let name = Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        };

        if !self.expect_peek(TokenType::ASSIGN) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::LOWEST as i32)?;

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }

        Some(LetStatement { token, name, value })
    }

    /// `return <expression>;` — both the expression and the trailing
    /// semicolon are optional (`return;` yields `value: None`).
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.curr_token.clone();
        self.next_token();

        let value = if self.is_curr_token(TokenType::SEMICOLON) {
            None
        } else {
            self.parse_expression(Precedence::LOWEST as i32)
        };

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }

        Some(ReturnStatement { token, value })
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.curr_token.literal.clone();
        Some(Expression::Identifier(Identifier { token, value }))
    }

    /// An expression used as a statement; the trailing semicolon is optional.
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.curr_token.clone();
        let value = self.parse_expression(Precedence::LOWEST as i32)?;

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }

        Some(ExpressionStatement { token, value })
    }

    /// Parses an expression via Pratt parsing: a prefix handler produces the
    /// left-hand side, then infix handlers fold in operators whose precedence
    /// is higher than the `precedence` floor passed in.
    fn parse_expression(&mut self, precedence: i32) -> Option<Expression> {
        let token_type = self.curr_token.token_type;
        let prefix = self.prefix_parse_fns.get(&token_type);
        let mut left = if let Some(prefix_parse_fn) = prefix {
            prefix_parse_fn(self)?
        } else {
            self.no_prefix_parse_function_error();
            return None;
        };

        while !self.is_peek_token(TokenType::SEMICOLON) && precedence < self.peek_precedence() {
            let peek_token_type = self.peek_token.token_type;
            let infix = self.infix_parse_fns.get(&peek_token_type).copied();
            let Some(infix_parse_fn) = infix else {
                return Some(left);
            };
            self.next_token();
            left = infix_parse_fn(self, left)?;
        }

        Some(left)
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let error =
                    ParserError::at_token(&token, format!("could not parse {} as integer", token.literal));
                log::error!("{}", error);
                self.errors.push(error);
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = token.literal.clone();
        Some(Expression::StringLiteral(StringLiteral { token, value }))
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.is_curr_token(TokenType::TRUE);
        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    /// `!<expr>` or `-<expr>`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        self.next_token();
        let right = match self.parse_expression(Precedence::PREFIX as i32) {
            Some(expr) => expr,
            None => {
                let error = ParserError::at_token(
                    &self.curr_token,
                    format!("failed to parse right-hand side of prefix operator '{}'", operator),
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };

        Some(Expression::PrefixExpression(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn peek_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.peek_token.token_type)
    }

    fn curr_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.curr_token.token_type)
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();
        let precedence = self.curr_precedence();

        self.next_token();
        let right = match self.parse_expression(precedence) {
            Some(expr) => expr,
            None => {
                let error = ParserError::at_token(
                    &self.curr_token,
                    format!(
                        "failed to parse right-hand side of infix operator '{}'",
                        operator
                    ),
                );
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };

        Some(Expression::InfixExpression(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `(<expr>)` — the parentheses are discarded; the inner expression is returned directly.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                let error =
                    ParserError::at_token(&self.curr_token, "failed to parse grouped expression");
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(expr)
    }

    /// `if (<condition>) <consequence>` or `if (<condition>) <consequence> else <alternative>`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        self.next_token();
        let condition = match self.parse_expression(Precedence::LOWEST as i32) {
            Some(e) => e,
            None => {
                let error =
                    ParserError::at_token(&self.curr_token, "failed to parse if condition");
                log::error!("{}", error);
                self.errors.push(error);
                return None;
            }
        };
        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.is_peek_token(TokenType::ELSE) {
            self.next_token();
            if !self.expect_peek(TokenType::LBRACE) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::IfExpression(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `{ <statements> }`. Assumes `curr_token` is the opening `{`.
    fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.curr_token.clone();
        let mut statements = Vec::new();

        while !self.is_peek_token(TokenType::RBRACE) && !self.is_peek_token(TokenType::EOF) {
            self.next_token();
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    let error = ParserError::at_token(
                        &self.curr_token,
                        "failed to parse statement in block",
                    );
                    log::error!("{}", error);
                    self.errors.push(error);
                }
            }
        }

        if !self.expect_peek(TokenType::RBRACE) {
            return None;
        }

        Some(BlockStatement { token, statements })
    }

    /// `fn(<parameters>) <body>`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Assumes `curr_token` is the opening `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.is_peek_token(TokenType::RPAREN) {
            self.next_token();
            return Some(parameters);
        }
        self.next_token();

        parameters.push(self.parse_parameter()?);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_parameter()?);
        }

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }

        Some(parameters)
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if !self.is_curr_token(TokenType::IDENT) {
            let error = ParserError::at_token(
                &self.curr_token,
                format!(
                    "expected parameter to be an identifier, got {:?}",
                    self.curr_token.token_type
                ),
            );
            log::error!("{}", error);
            self.errors.push(error);
            return None;
        }
        Some(Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        })
    }

    /// `<function>(<arguments>)`.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let arguments = self.parse_expression_list(TokenType::RPAREN)?;
        Some(Expression::CallExpression(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Assumes `curr_token` is the opening delimiter of the list (e.g. `(`).
    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.is_peek_token(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::LOWEST as i32)?);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::LOWEST as i32)?);
        }

        if !self.expect_peek(end) {
            let error = ParserError::at_token(
                &self.peek_token,
                format!(
                    "expected {:?} to close argument list, got {:?}",
                    end, self.peek_token.token_type
                ),
            );
            log::error!("{}", error);
            self.errors.push(error);
            return None;
        }

        Some(list)
    }
}
