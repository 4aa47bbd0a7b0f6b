//! Program source parser (the grammar driver)
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, helpers and the [`parse_program`] entry point
//! - `statements` / `expressions`: the recursive descent rules
//! - [`ast`]: AST node definitions and constructors
//!
//! # Supported language
//!
//! - `int name = expr;` declarations and `name = expr;` assignments
//! - `print(expr);` and bare `expr;` (printed)
//! - `if (expr): ... [else: ...] end` with statement blocks
//! - Integer arithmetic `+ - * /` and comparisons `== != <= >= < >`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. No external parser generator dependencies.
//! The whole program is recognized before anything runs: a syntax error
//! anywhere means no statement executes.

pub mod ast;
pub mod lexer;
pub mod parse;

mod expressions;
mod statements;

pub use parse::{parse_program, ParseError};
