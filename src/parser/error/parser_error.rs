//! A single parser error: a source span plus a human-readable message.

use super::span::Span;
use crate::lexer::token::Token;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    pub span: Span,
    pub message: String,
}

impl ParserError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Builds an error located at the given token's position.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        Self::new(Span::from_token(token), message)
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.message)
    }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParserError::new(Span::new(1, 10), "expected SEMICOLON, got RBRACE ('}')");
        assert_eq!(
            error.to_string(),
            "[line 1:10] expected SEMICOLON, got RBRACE ('}')"
        );
    }
}
