// Execution engine for the interpreter

use crate::interpreter::errors::{ReplayError, RuntimeError};
use crate::memory::SymbolStore;
use crate::parser::ast::*;
use crate::snapshot::{Channels, Snapshot, SnapshotManager};

/// Executes a fully constructed program.
///
/// An interpreter is inert until [`Interpreter::run`] is called. `run`
/// consumes it, so a program tree is executed at most once per interpreter.
pub struct Interpreter {
    /// Parsed program (root statement list and variable names)
    program: Program,

    /// Variable values, sized to the program's variable count
    pub(crate) symbols: SymbolStore,

    /// Trace, effects and diagnostics output
    pub(crate) channels: Channels,

    /// Snapshot history for the step-through viewer
    snapshots: SnapshotManager,

    /// Current source location being executed
    pub(crate) current_location: SourceLocation,
}

impl Interpreter {
    /// Create a new interpreter for the parsed program
    pub fn new(program: Program) -> Self {
        let symbols = SymbolStore::new(program.variable_count());
        Interpreter {
            program,
            symbols,
            channels: Channels::new(),
            snapshots: SnapshotManager::new(),
            current_location: SourceLocation::default(),
        }
    }

    /// Run the program to completion.
    ///
    /// Runtime conditions never stop the run; they are collected on the
    /// diagnostics channel of the returned [`Execution`].
    pub fn run(mut self) -> Execution {
        let program = std::mem::take(&mut self.program);
        tracing::debug!(
            statements = program.len(),
            variables = program.variable_count(),
            "starting execution"
        );

        self.push_snapshot(None);
        self.execute_list(&program.root);

        tracing::debug!(
            snapshots = self.snapshots.len(),
            diagnostics = self.channels.diagnostic_count(),
            "execution finished"
        );

        let history_position = self.snapshots.len().saturating_sub(1);
        Execution {
            variables: program.variables,
            symbols: self.symbols,
            channels: self.channels,
            snapshots: self.snapshots,
            history_position,
        }
    }

    /// Write a runtime condition to the diagnostics channel
    pub(crate) fn report(&mut self, err: RuntimeError) {
        tracing::warn!(
            kind = err.kind(),
            line = err.location().line,
            "{}",
            err
        );
        self.channels.push_diagnostic(&err);
    }

    /// Record the state after `stmt` for the step-through viewer
    pub(crate) fn take_snapshot(&mut self, stmt: &AstNode) {
        self.current_location = *stmt.location();
        self.push_snapshot(Some(stmt.label()));
    }

    fn push_snapshot(&mut self, statement_label: Option<String>) {
        self.snapshots.push(Snapshot {
            statement_label,
            source_location: self.current_location,
            symbols: self.symbols.clone(),
            trace_len: self.channels.trace_blocks().len(),
            output_len: self.channels.output().len(),
        });
    }
}

/// Build-then-run convenience: execute `program` and return the result
pub fn execute_program(program: Program) -> Execution {
    Interpreter::new(program).run()
}

/// The outcome of one run: final state, output channels and snapshot history.
///
/// Also a cursor over the history so the viewer can step back and forth;
/// after a run the cursor sits on the last snapshot.
#[derive(Debug)]
pub struct Execution {
    variables: Vec<String>,
    symbols: SymbolStore,
    channels: Channels,
    snapshots: SnapshotManager,
    history_position: usize,
}

impl Execution {
    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    /// Final symbol store contents
    pub fn symbols(&self) -> &SymbolStore {
        &self.symbols
    }

    /// Variable names, indexed by id
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Name of a variable id, if the parser assigned one
    pub fn variable_name(&self, id: VarId) -> Option<&str> {
        self.variables.get(id).map(String::as_str)
    }

    /// Number of runtime conditions reported during the run
    pub fn error_count(&self) -> usize {
        self.channels.diagnostic_count()
    }

    pub fn ran_clean(&self) -> bool {
        self.error_count() == 0
    }

    // ========== History replay for the viewer ==========

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.history_position)
    }

    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots (executed statements plus the initial state)
    pub fn total_snapshots(&self) -> usize {
        self.snapshots.len()
    }

    pub fn current_location(&self) -> SourceLocation {
        self.current()
            .map(|snapshot| snapshot.source_location)
            .unwrap_or_default()
    }

    pub fn is_at_start(&self) -> bool {
        self.history_position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.history_position + 1 >= self.snapshots.len()
    }

    /// Move the cursor one snapshot back
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.is_at_start() {
            return Err(ReplayError::AtStart);
        }
        self.history_position -= 1;
        Ok(())
    }

    /// Move the cursor one snapshot forward
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.is_at_end() {
            return Err(ReplayError::AtEnd);
        }
        self.history_position += 1;
        Ok(())
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) {
        self.history_position = 0;
    }

    /// Jump to the last snapshot
    pub fn jump_to_end(&mut self) {
        self.history_position = self.snapshots.len().saturating_sub(1);
    }

    /// Trace block of the statement at the cursor
    pub fn current_trace_block(&self) -> Option<&str> {
        let len = self.current()?.trace_len;
        len.checked_sub(1)
            .and_then(|index| self.channels.trace_blocks().get(index))
            .map(String::as_str)
    }
}
