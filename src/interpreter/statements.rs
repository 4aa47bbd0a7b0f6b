//! Statement execution implementation
//!
//! Every executed statement first writes its rendered subtree to the trace
//! channel, then performs its effect:
//!
//! - `Declaration` / `Assignment`: evaluate, store, emit `Declared`/`Assigned`
//! - `Print`: evaluate, emit `Print: <value>`
//! - `If`: evaluate the condition and run exactly one branch
//!
//! A statement whose shape is wrong reports a [`RuntimeError`] and has its
//! effect skipped; execution always moves on to the next statement.
//!
//! All statement execution methods are `pub(crate)` methods on the
//! [`Interpreter`] struct.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::render::render_tree;
use crate::parser::ast::*;

impl Interpreter {
    /// Execute a statement list in source order. A bare statement is
    /// executed directly; an empty list does nothing.
    pub(crate) fn execute_list(&mut self, list: &AstNode) {
        match list {
            AstNode::StmtList { statements, .. } => {
                for stmt in statements {
                    self.execute_statement(stmt);
                }
            }
            stmt => self.execute_statement(stmt),
        }
    }

    pub(crate) fn execute_statement(&mut self, stmt: &AstNode) {
        self.current_location = *stmt.location();
        self.channels.push_trace(render_tree(stmt));
        tracing::debug!(
            statement = %stmt.label(),
            line = stmt.location().line,
            "executing statement"
        );

        let result = match stmt {
            AstNode::Declaration {
                target,
                init,
                location,
            } => self.execute_declaration(target, init, *location),

            AstNode::Assignment {
                target,
                value,
                location,
            } => self.execute_assignment(target, value, *location),

            AstNode::Print { expr, location } => {
                let value = self.evaluate(expr);
                self.channels.push_effect(format!("Print: {}", value), *location);
                Ok(())
            }

            AstNode::If {
                condition,
                branches,
                location,
            } => {
                // The If records its own snapshot before its branch runs
                return self.execute_if(stmt, condition, branches, *location);
            }

            AstNode::StmtList { .. } => {
                self.execute_list(stmt);
                return;
            }

            other => Err(RuntimeError::InternalError {
                message: format!("Unknown statement kind '{}'", other.label()),
                location: *other.location(),
            }),
        };

        if let Err(err) = result {
            self.report(err);
        }
        self.take_snapshot(stmt);
    }

    fn execute_declaration(
        &mut self,
        target: &AstNode,
        init: &AstNode,
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let value = self.evaluate(init);
        let id = Self::target_id(target, "Declaration", location)?;
        self.store(id, value, location)?;
        self.channels
            .push_effect(format!("Declared var[{}] = {}", id, value), location);
        Ok(())
    }

    fn execute_assignment(
        &mut self,
        target: &AstNode,
        value: &AstNode,
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let value = self.evaluate(value);
        let id = Self::target_id(target, "Assignment", location)?;
        // Assigning a never-declared variable is allowed
        self.store(id, value, location)?;
        self.channels
            .push_effect(format!("Assigned var[{}] = {}", id, value), location);
        Ok(())
    }

    fn execute_if(
        &mut self,
        stmt: &AstNode,
        condition: &AstNode,
        branches: &AstNode,
        location: SourceLocation,
    ) {
        let cond = self.evaluate(condition);
        self.take_snapshot(stmt);

        match branches {
            AstNode::Branches {
                then_branch,
                else_branch,
                ..
            } => {
                if cond != 0 {
                    self.execute_list(then_branch);
                } else {
                    self.execute_list(else_branch);
                }
            }
            _ => self.report(RuntimeError::MalformedTree {
                message: "If branches malformed".to_string(),
                location,
            }),
        }
    }

    fn target_id(
        target: &AstNode,
        statement: &str,
        location: SourceLocation,
    ) -> Result<VarId, RuntimeError> {
        match target {
            AstNode::Variable(id, _) => Ok(*id),
            _ => Err(RuntimeError::MalformedTree {
                message: format!("{} left side is not a variable", statement),
                location,
            }),
        }
    }

    fn store(&mut self, id: VarId, value: i32, location: SourceLocation) -> Result<(), RuntimeError> {
        self.symbols
            .write(id, value)
            .map_err(|message| RuntimeError::MalformedTree { message, location })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::{Execution, Interpreter};
    use crate::parser::ast::*;

    fn loc(line: usize) -> SourceLocation {
        SourceLocation::new(line, 1)
    }

    fn run_statements(statements: Vec<AstNode>, variables: usize) -> Execution {
        let root = statements
            .into_iter()
            .fold(AstNode::stmt_list(loc(1)), AstNode::append);
        let names = (0..variables).map(|i| format!("v{}", i)).collect();
        Interpreter::new(Program::new(root, names)).run()
    }

    #[test]
    fn test_declaration_target_must_be_variable() {
        let bad = AstNode::Declaration {
            target: Box::new(AstNode::int_literal(1, loc(3))),
            init: Box::new(AstNode::int_literal(2, loc(3))),
            location: loc(3),
        };
        let exec = run_statements(vec![bad, AstNode::print(AstNode::int_literal(9, loc(4)), loc(4))], 0);

        assert_eq!(
            exec.channels().diagnostics().collect::<Vec<_>>(),
            vec!["Error: Declaration left side is not a variable at line 3"]
        );
        assert_eq!(exec.channels().effects().collect::<Vec<_>>(), vec!["Print: 9"]);
    }

    #[test]
    fn test_assignment_target_must_be_variable() {
        let bad = AstNode::Assignment {
            target: Box::new(AstNode::print(AstNode::int_literal(1, loc(2)), loc(2))),
            value: Box::new(AstNode::int_literal(2, loc(2))),
            location: loc(2),
        };
        let exec = run_statements(vec![bad], 0);
        assert_eq!(
            exec.channels().diagnostics().collect::<Vec<_>>(),
            vec!["Error: Assignment left side is not a variable at line 2"]
        );
        assert_eq!(exec.channels().effects().count(), 0);
    }

    #[test]
    fn test_if_with_malformed_branches() {
        let bad = AstNode::If {
            condition: Box::new(AstNode::int_literal(1, loc(5))),
            branches: Box::new(AstNode::print(AstNode::int_literal(1, loc(5)), loc(5))),
            location: loc(5),
        };
        let exec = run_statements(vec![bad], 0);
        assert_eq!(
            exec.channels().diagnostics().collect::<Vec<_>>(),
            vec!["Error: If branches malformed at line 5"]
        );
        assert_eq!(exec.channels().effects().count(), 0);
    }

    #[test]
    fn test_expression_at_statement_position() {
        let exec = run_statements(vec![AstNode::int_literal(4, loc(2))], 0);
        assert_eq!(exec.error_count(), 1);
        assert!(exec
            .channels()
            .diagnostics()
            .all(|line| line.contains("Unknown statement kind")));
        // Still rendered to the trace
        assert_eq!(exec.channels().trace_blocks().len(), 1);
    }

    #[test]
    fn test_statement_in_expression_position() {
        let print_of_print = AstNode::print(
            AstNode::print(AstNode::int_literal(1, loc(1)), loc(1)),
            loc(1),
        );
        let exec = run_statements(vec![print_of_print], 0);
        assert_eq!(exec.channels().effects().collect::<Vec<_>>(), vec!["Print: 0"]);
        assert_eq!(exec.error_count(), 1);
    }

    #[test]
    fn test_write_outside_store_is_reported() {
        // Variable id 3 with a store sized for one variable
        let stmt = AstNode::declaration(3, AstNode::int_literal(1, loc(1)), loc(1));
        let exec = run_statements(vec![stmt], 1);
        assert_eq!(exec.error_count(), 1);
        assert_eq!(exec.channels().effects().count(), 0);
    }

    #[test]
    fn test_bare_statement_as_branch() {
        let stmt = AstNode::if_stmt(
            AstNode::int_literal(0, loc(1)),
            AstNode::stmt_list(loc(1)),
            Some(AstNode::print(AstNode::int_literal(6, loc(2)), loc(2))),
            loc(1),
        );
        let exec = run_statements(vec![stmt], 0);
        assert_eq!(exec.channels().effects().collect::<Vec<_>>(), vec!["Print: 6"]);
        assert_eq!(exec.channels().trace_blocks().len(), 2);
    }
}
