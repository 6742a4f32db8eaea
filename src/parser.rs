//! Recursive descent parser for filter expressions
//!
//! # Grammar
//!
//! ```text
//! or_expr    := and_expr ("or" and_expr)*
//! and_expr   := comparison ("and" comparison)*
//! comparison := "(" or_expr ")" | FIELD OPERATOR VALUE
//! OPERATOR   := "eq" | "ne" | "gt" | "ge" | "lt" | "le"
//! ```
//!
//! Keywords are matched case-insensitively. The query document is built while
//! parsing; no syntax tree is kept.
//!
//! Recursion depth follows the parenthesis nesting of the input and is not
//! limited.

use serde_json::Value as Json;
use thiserror::Error;

use crate::{
    lexer::Lexer,
    operator::CompareOp,
    query,
    token::Token,
    value::Value,
};

/// Errors that abort a parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token was required but the input was exhausted
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// The operator position held something other than eq/ne/gt/ge/lt/le
    #[error("Unsupported comparison operator: {0}")]
    UnsupportedOperator(String),
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser::from_tokens(lexer.tokenize())
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn check(&self, keyword: &str) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|token| token.matches(keyword))
    }

    /// Advances past the current token only if it matches `keyword`.
    fn consume(&mut self, keyword: &str) -> bool {
        if self.check(keyword) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn next(&mut self) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or(ParseError::UnexpectedEndOfInput)?;
        self.position += 1;
        Ok(token)
    }

    fn parse_or(&mut self) -> Result<Json, ParseError> {
        let mut clauses = vec![self.parse_and()?];

        while self.consume("or") {
            clauses.push(self.parse_and()?);
        }

        Ok(if clauses.len() == 1 {
            clauses.swap_remove(0)
        } else {
            query::should(clauses)
        })
    }

    fn parse_and(&mut self) -> Result<Json, ParseError> {
        let mut clauses = vec![self.parse_comparison()?];

        while self.consume("and") {
            clauses.push(self.parse_comparison()?);
        }

        Ok(if clauses.len() == 1 {
            clauses.swap_remove(0)
        } else {
            query::must(clauses)
        })
    }

    fn parse_comparison(&mut self) -> Result<Json, ParseError> {
        if self.consume("(") {
            let expr = self.parse_or()?;
            // A missing ')' is tolerated.
            self.consume(")");
            return Ok(expr);
        }

        let field = self.next()?;
        let op_token = self.next()?;
        let value = Value::from_token(self.next()?);

        let op = CompareOp::from_token(&op_token)
            .ok_or_else(|| ParseError::UnsupportedOperator(op_token.into_string()))?;

        Ok(query::comparison(field.as_str(), op, &value))
    }

    /// Parses the whole token sequence into a query document.
    ///
    /// Tokens left over after a complete expression are ignored.
    pub fn parse(&mut self) -> Result<Json, ParseError> {
        self.parse_or()
    }
}
