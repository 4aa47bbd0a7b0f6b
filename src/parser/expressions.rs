//! Expression parsing implementation
//!
//! # Precedence (lowest to highest)
//!
//! 1. Comparison: `==` `!=` `<=` `>=` `<` `>` (non-associative)
//! 2. Additive: `+` `-` (left-associative)
//! 3. Multiplicative: `*` `/` (left-associative)
//! 4. Primary: integer literal, identifier, parenthesized expression
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<AstNode, ParseError> {
        let left = self.parse_additive()?;

        let Some(op) = self.comparison_operator() else {
            return Ok(left);
        };
        let loc = self.current_location();
        self.advance();
        let right = self.parse_additive()?;

        if self.comparison_operator().is_some() {
            return Err(self.error_here("Comparison operators cannot be chained"));
        }

        Ok(AstNode::binary_op(op, left, right, loc))
    }

    fn comparison_operator(&self) -> Option<BinOp> {
        match self.peek() {
            Token::EqEq(_) => Some(BinOp::Eq),
            Token::NotEq(_) => Some(BinOp::Ne),
            Token::Le(_) => Some(BinOp::Le),
            Token::Ge(_) => Some(BinOp::Ge),
            Token::Lt(_) => Some(BinOp::Lt),
            Token::Gt(_) => Some(BinOp::Gt),
            _ => None,
        }
    }

    /// Parse `+` and `-`
    fn parse_additive(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek() {
                Token::Plus(_) => BinOp::Add,
                Token::Minus(_) => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let loc = self.previous_location();
            let right = self.parse_multiplicative()?;
            left = AstNode::binary_op(op, left, right, loc);
        }

        Ok(left)
    }

    /// Parse `*` and `/`
    fn parse_multiplicative(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.peek() {
                Token::Star(_) => BinOp::Mul,
                Token::Slash(_) => BinOp::Div,
                _ => break,
            };
            self.advance();
            let loc = self.previous_location();
            let right = self.parse_primary()?;
            left = AstNode::binary_op(op, left, right, loc);
        }

        Ok(left)
    }

    /// Parse primary expressions (literals, identifiers, parenthesized)
    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        match self.peek().clone() {
            Token::IntLiteral(value, loc) => {
                self.advance();
                Ok(AstNode::int_literal(value, loc))
            }
            Token::Ident(name, loc) => {
                self.advance();
                let id = self.variable_id(&name, loc)?;
                Ok(AstNode::variable(id, loc))
            }
            Token::LParen(_) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_rparen("after expression")?;
                Ok(expr)
            }
            _ => Err(self.error_here("Expected expression")),
        }
    }
}
