//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, variable interning, helper methods
//! - `statements`: declarations, assignments, `print`, `if/else/end`
//! - `expressions`: comparison, additive and multiplicative levels
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The parser only ever *builds* nodes through the [`AstNode`] constructors.
//! Nothing is evaluated here; the finished [`Program`] is handed to the
//! interpreter once the whole source has been recognized.

use crate::interpreter::constants::MAX_VARIABLES;
use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, Error)]
#[error("Parse error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    /// The line written to the diagnostics channel when construction fails
    pub fn diagnostic_line(&self) -> String {
        format!("Error: {} at line {}", self.message, self.location.line)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recognize a whole program. Nothing executes until this has succeeded.
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Recursive descent parser
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Identifier -> variable id, assigned in order of first appearance
    variable_ids: FxHashMap<String, VarId>,
    variable_names: Vec<String>,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            variable_ids: FxHashMap::default(),
            variable_names: Vec::new(),
        })
    }

    /// Parse the entire program (top-level statements)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let root = self.parse_statements(|token| matches!(token, Token::Eof(_)))?;

        tracing::debug!(
            statements = root.list_len().unwrap_or(0),
            variables = self.variable_names.len(),
            "program recognized"
        );

        Ok(Program::new(root, std::mem::take(&mut self.variable_names)))
    }

    // ===== Variable interning =====

    /// Map an identifier to its variable id, allocating the next id on first use
    pub(crate) fn variable_id(
        &mut self,
        name: &str,
        location: SourceLocation,
    ) -> Result<VarId, ParseError> {
        if let Some(&id) = self.variable_ids.get(name) {
            return Ok(id);
        }

        let id = self.variable_names.len();
        if id >= MAX_VARIABLES {
            return Err(ParseError {
                message: format!(
                    "Too many variables: '{}' would exceed the limit of {}",
                    name, MAX_VARIABLES
                ),
                location,
            });
        }

        self.variable_ids.insert(name.to_string(), id);
        self.variable_names.push(name.to_string());
        Ok(id)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn error_here(&self, message: &str) -> ParseError {
        ParseError {
            message: format!("{}, found {}", message, self.peek()),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(message))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_colon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::Colon(self.current_location()),
            &format!("Expected ':' {ctx}"),
        )
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            &format!("Expected ';' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<(String, SourceLocation), ParseError> {
        if let Token::Ident(name, loc) = self.peek() {
            let result = (name.clone(), *loc);
            self.advance();
            Ok(result)
        } else {
            Err(self.error_here("Expected identifier"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_program() {
        let program = parse_program("").unwrap();
        assert!(program.is_empty());
        assert_eq!(program.variable_count(), 0);
    }

    #[test]
    fn test_parse_simple_program() {
        let program = parse_program("int a = 3; a = a + 4; print(a);").unwrap();

        assert_eq!(program.len(), 3);
        assert_eq!(program.variables, vec!["a".to_string()]);
        match &program.root {
            AstNode::StmtList { statements, .. } => {
                assert!(matches!(statements[0], AstNode::Declaration { .. }));
                assert!(matches!(statements[1], AstNode::Assignment { .. }));
                assert!(matches!(statements[2], AstNode::Print { .. }));
            }
            other => panic!("Expected statement list, got {:?}", other),
        }
    }

    #[test]
    fn test_variables_interned_in_first_use_order() {
        let program = parse_program("print(z); int y = 1; z = y;").unwrap();
        assert_eq!(program.variables, vec!["z".to_string(), "y".to_string()]);

        match &program.root {
            AstNode::StmtList { statements, .. } => match &statements[2] {
                AstNode::Assignment { target, value, .. } => {
                    assert!(matches!(**target, AstNode::Variable(0, _)));
                    assert!(matches!(**value, AstNode::Variable(1, _)));
                }
                other => panic!("Expected assignment, got {:?}", other),
            },
            other => panic!("Expected statement list, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_variables() {
        let source: String = (0..=MAX_VARIABLES)
            .map(|i| format!("int v{} = {};\n", i, i))
            .collect();
        let err = parse_program(&source).unwrap_err();
        assert!(err.message.contains("Too many variables"));
        assert_eq!(err.location.line, MAX_VARIABLES + 1);
    }

    #[test]
    fn test_lex_error_becomes_parse_error() {
        let err = parse_program("print(1 # 2);").unwrap_err();
        assert_eq!(err.location, SourceLocation::new(1, 9));
        assert!(err.to_string().starts_with("Parse error at line 1, column 9"));
    }
}
