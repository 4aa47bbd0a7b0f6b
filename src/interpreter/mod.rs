//! Tree-walking execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: [`Interpreter`](engine::Interpreter) and the [`Execution`](engine::Execution) it produces
//! - [`render`]: vertical tree rendering for the trace channel
//! - [`errors`]: Runtime error types
//! - [`constants`]: Limits and layout constants
//!
//! # Execution Model
//!
//! Execution starts only after the whole program has been parsed. The
//! interpreter walks the root statement list in source order; each executed
//! statement is rendered to the trace, performs its effect, and records a
//! snapshot for the step-through viewer.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod render;

mod expressions;
mod statements;

pub use engine::{execute_program, Execution, Interpreter};
pub use errors::RuntimeError;
pub use expressions::apply_binary_op;
