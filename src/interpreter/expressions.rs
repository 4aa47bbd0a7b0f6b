//! Expression evaluation implementation
//!
//! Evaluation is total: every expression yields an `i32`. Conditions found on
//! the way (division by zero, a statement node where an expression belongs)
//! are reported to the diagnostics channel and the offending subtree yields 0,
//! so an enclosing expression keeps computing with that default.
//!
//! Both operands are always evaluated, left before right. Arithmetic wraps on
//! overflow; comparisons yield 1 or 0.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::*;

impl Interpreter {
    /// Evaluate an expression and return its value
    pub(crate) fn evaluate(&mut self, expr: &AstNode) -> i32 {
        match expr {
            AstNode::IntLiteral(value, _) => *value,

            AstNode::Variable(id, _) => self.symbols.read(*id),

            AstNode::BinaryOp {
                op,
                left,
                right,
                location,
            } => {
                let lhs = self.evaluate(left);
                let rhs = self.evaluate(right);
                match apply_binary_op(*op, lhs, rhs, *location) {
                    Ok(value) => value,
                    Err(err) => {
                        self.report(err);
                        0
                    }
                }
            }

            other => {
                self.report(RuntimeError::InternalError {
                    message: format!("Expected expression node, found '{}'", other.label()),
                    location: *other.location(),
                });
                0
            }
        }
    }
}

/// Apply a binary operator to two evaluated operands
#[inline]
pub fn apply_binary_op(
    op: BinOp,
    lhs: i32,
    rhs: i32,
    location: SourceLocation,
) -> Result<i32, RuntimeError> {
    let value = match op {
        BinOp::Add => lhs.wrapping_add(rhs),
        BinOp::Sub => lhs.wrapping_sub(rhs),
        BinOp::Mul => lhs.wrapping_mul(rhs),
        BinOp::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { location });
            }
            lhs.wrapping_div(rhs)
        }
        BinOp::Eq => (lhs == rhs) as i32,
        BinOp::Ne => (lhs != rhs) as i32,
        BinOp::Le => (lhs <= rhs) as i32,
        BinOp::Ge => (lhs >= rhs) as i32,
        BinOp::Lt => (lhs < rhs) as i32,
        BinOp::Gt => (lhs > rhs) as i32,
    };
    Ok(value)
}
