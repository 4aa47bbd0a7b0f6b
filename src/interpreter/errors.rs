//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], the conditions the evaluator and
//! executor can report while a program runs.
//!
//! No runtime error is fatal. Each one is written to the diagnostics channel
//! where it is detected, a default is applied (the expression yields 0 or the
//! statement's effect is skipped) and execution carries on with the next
//! statement.

use crate::parser::ast::SourceLocation;
use thiserror::Error;

/// Runtime conditions that can be reported during execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Right operand of `/` evaluated to zero
    #[error("Division by zero")]
    DivisionByZero { location: SourceLocation },

    /// A statement or branch holder does not have the shape the executor expects
    #[error("{message}")]
    MalformedTree {
        message: String,
        location: SourceLocation,
    },

    /// A node kind reached a position that cannot handle it
    #[error("{message}")]
    InternalError {
        message: String,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            RuntimeError::DivisionByZero { location } => location,
            RuntimeError::MalformedTree { location, .. } => location,
            RuntimeError::InternalError { location, .. } => location,
        }
    }

    /// Short name of the condition, used in logs and the viewer
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::DivisionByZero { .. } => "DivisionByZero",
            RuntimeError::MalformedTree { .. } => "MalformedTree",
            RuntimeError::InternalError { .. } => "InternalError",
        }
    }

    /// The line written to the diagnostics channel
    pub fn diagnostic_line(&self) -> String {
        format!("Error: {} at line {}", self, self.location().line)
    }
}

/// Reasons a replay step cannot move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Already at the beginning of execution")]
    AtStart,

    #[error("No more snapshots available (execution finished)")]
    AtEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_line_format() {
        let err = RuntimeError::DivisionByZero {
            location: SourceLocation::new(7, 3),
        };
        assert_eq!(err.diagnostic_line(), "Error: Division by zero at line 7");

        let err = RuntimeError::MalformedTree {
            message: "If branches malformed".to_string(),
            location: SourceLocation::new(2, 1),
        };
        assert_eq!(err.diagnostic_line(), "Error: If branches malformed at line 2");
        assert_eq!(err.kind(), "MalformedTree");
    }
}
