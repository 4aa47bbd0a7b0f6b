//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! stmts       ::= stmt*
//! stmt        ::= declaration | assignment | print_stmt | if_stmt | expr ';'
//! declaration ::= 'int' IDENT '=' expr ';'
//! assignment  ::= IDENT '=' expr ';'
//! print_stmt  ::= 'print' '(' expr ')' ';'
//! if_stmt     ::= 'if' '(' expr ')' ':' stmts ['else' ':' stmts] 'end'
//! ```
//!
//! A bare expression statement is built as a `print` of its value.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse statements until `at_end` matches the next token (which is not consumed)
    pub(crate) fn parse_statements(
        &mut self,
        at_end: impl Fn(&Token) -> bool,
    ) -> Result<AstNode, ParseError> {
        let mut list = AstNode::stmt_list(self.current_location());

        while !at_end(self.peek()) {
            if self.is_at_end() {
                return Err(self.error_here("Expected 'else' or 'end' to close 'if'"));
            }
            let stmt = self.parse_statement()?;
            list = AstNode::append(list, stmt);
        }

        Ok(list)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Int(loc)) {
            return self.parse_declaration();
        }

        if self.match_token(&Token::Print(loc)) {
            return self.parse_print_statement();
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement();
        }

        // Assignment: identifier followed by '='
        if let Token::Ident(_, _) = self.peek() {
            if self
                .peek_ahead(1)
                .map(|t| matches!(t, Token::Eq(_)))
                .unwrap_or(false)
            {
                return self.parse_assignment();
            }
        }

        // Otherwise, it's an expression statement
        let expr = self.parse_expression()?;
        self.expect_semicolon("after expression")?;
        Ok(AstNode::print(expr, loc))
    }

    /// Parse `int name = expr;` (the `int` keyword is already consumed)
    fn parse_declaration(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        let (name, name_loc) = self.expect_identifier()?;
        let id = self.variable_id(&name, name_loc)?;

        self.expect_token(
            &Token::Eq(self.current_location()),
            "Expected '=' in declaration",
        )?;
        let init = self.parse_expression()?;
        self.expect_semicolon("after declaration")?;

        Ok(AstNode::declaration(id, init, loc))
    }

    /// Parse `name = expr;`
    fn parse_assignment(&mut self) -> Result<AstNode, ParseError> {
        let (name, loc) = self.expect_identifier()?;
        let id = self.variable_id(&name, loc)?;

        self.expect_token(
            &Token::Eq(self.current_location()),
            "Expected '=' in assignment",
        )?;
        let value = self.parse_expression()?;
        self.expect_semicolon("after assignment")?;

        Ok(AstNode::assignment(id, value, loc))
    }

    /// Parse `print(expr);` (the `print` keyword is already consumed)
    fn parse_print_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'print'")?;
        let expr = self.parse_expression()?;
        self.expect_rparen("after print argument")?;
        self.expect_semicolon("after print statement")?;

        Ok(AstNode::print(expr, loc))
    }

    /// Parse `if (cond): stmts [else: stmts] end` (the `if` keyword is already consumed)
    fn parse_if_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect_rparen("after if condition")?;
        self.expect_colon("after if condition")?;

        let then_branch =
            self.parse_statements(|token| matches!(token, Token::Else(_) | Token::End(_)))?;

        let else_branch = if self.match_token(&Token::Else(self.current_location())) {
            self.expect_colon("after 'else'")?;
            Some(self.parse_statements(|token| matches!(token, Token::End(_)))?)
        } else {
            None
        };

        self.expect_token(
            &Token::End(self.current_location()),
            "Expected 'end' to close 'if'",
        )?;

        Ok(AstNode::if_stmt(condition, then_branch, else_branch, loc))
    }
}
