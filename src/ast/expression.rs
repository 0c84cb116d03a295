//! Expression types in the language's AST.
//!
//! Expressions represent values and computations that evaluate to a value.
//! All expression types are consolidated in this module.

use super::statement::BlockStatement;
use super::Node;
use crate::lexer::token::Token;
use std::fmt::{self, Display};

/// A name that refers to a variable, function, or other bound entity.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

/// A signed 64-bit integer literal, e.g. `42`, `-10` (the `-` is a separate
/// prefix expression; the literal itself is always non-negative text).
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// `true` or `false`.
#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

/// A double-quoted string literal; `value` holds the text between the quotes.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

/// A prefix expression (e.g., `!true`, `-5`).
#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

/// An infix expression (e.g., `5 + 3`, `x == y`).
#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `if (<condition>) <consequence> else <alternative>`
#[derive(Debug, Clone)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// `fn(<parameters>) <body>`
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `<function>(<arguments>)`
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// Enum representing all expression types in the AST.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    PrefixExpression(PrefixExpression),
    InfixExpression(InfixExpression),
    IfExpression(IfExpression),
    FunctionLiteral(FunctionLiteral),
    CallExpression(CallExpression),
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for StringLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{}({}) {{ {} }}",
            self.token_literal(),
            params.join(", "),
            self.body
        )
    }
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::IntegerLiteral(e) => e.token_literal(),
            Expression::BooleanLiteral(e) => e.token_literal(),
            Expression::StringLiteral(e) => e.token_literal(),
            Expression::PrefixExpression(e) => e.token_literal(),
            Expression::InfixExpression(e) => e.token_literal(),
            Expression::IfExpression(e) => e.token_literal(),
            Expression::FunctionLiteral(e) => e.token_literal(),
            Expression::CallExpression(e) => e.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{}", e),
            Expression::IntegerLiteral(e) => write!(f, "{}", e),
            Expression::BooleanLiteral(e) => write!(f, "{}", e),
            Expression::StringLiteral(e) => write!(f, "{}", e),
            Expression::PrefixExpression(e) => write!(f, "{}", e),
            Expression::InfixExpression(e) => write!(f, "{}", e),
            Expression::IfExpression(e) => write!(f, "{}", e),
            Expression::FunctionLiteral(e) => write!(f, "{}", e),
            Expression::CallExpression(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenType;

    #[test]
    fn test_identifier_display() {
        let ident = Identifier {
            token: Token::new(TokenType::IDENT, "foobar".to_string(), 1, 1),
            value: "foobar".to_string(),
        };

        assert_eq!(ident.value, "foobar");
        assert_eq!(ident.token_literal(), "foobar");
        assert_eq!(format!("{}", ident), "foobar");
    }

    #[test]
    fn test_prefix_expression_display_bang() {
        let ident = Identifier {
            token: Token::new(TokenType::IDENT, "foobar".to_string(), 1, 1),
            value: "foobar".to_string(),
        };
        let prefix = PrefixExpression {
            token: Token::new(TokenType::BANG, "!".to_string(), 1, 1),
            operator: "!".to_string(),
            right: Box::new(Expression::Identifier(ident)),
        };

        assert_eq!(prefix.token_literal(), "!");
        assert_eq!(format!("{}", prefix), "(!foobar)");
    }

    #[test]
    fn test_infix_expression_display_plus() {
        let left = IntegerLiteral {
            token: Token::new(TokenType::INT, "5".to_string(), 1, 1),
            value: 5,
        };
        let right = IntegerLiteral {
            token: Token::new(TokenType::INT, "3".to_string(), 1, 1),
            value: 3,
        };
        let infix = InfixExpression {
            token: Token::new(TokenType::PLUS, "+".to_string(), 1, 1),
            left: Box::new(Expression::IntegerLiteral(left)),
            operator: "+".to_string(),
            right: Box::new(Expression::IntegerLiteral(right)),
        };

        assert_eq!(infix.token_literal(), "+");
        assert_eq!(format!("{}", infix), "(5 + 3)");
    }

    #[test]
    fn test_string_literal_display() {
        let s = StringLiteral {
            token: Token::new(TokenType::STRING, "hello".to_string(), 1, 1),
            value: "hello".to_string(),
        };
        assert_eq!(format!("{}", s), "hello");
    }
}
