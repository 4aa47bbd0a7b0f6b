//! # Introduction
//!
//! treewalk parses and executes a small imperative language with integer
//! variables, arithmetic and comparison expressions, `print`, and
//! single-level `if`/`else` blocks. Execution writes three channels: an
//! effects log, a trace with the rendered tree of every executed statement,
//! and diagnostics. A terminal UI built with
//! [ratatui](https://docs.rs/ratatui) can replay the run statement by statement.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter → Channels + Snapshots → TUI
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the whole program tree.
//!    A syntax error anywhere means nothing runs.
//! 2. [`interpreter`]: walks the tree once, evaluating expressions and
//!    performing statement effects.
//! 3. [`memory`]: the per-run [`memory::SymbolStore`].
//! 4. [`snapshot`]: the output [`snapshot::Channels`] and per-statement
//!    [`snapshot::Snapshot`]s.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use treewalk::{interpreter::Interpreter, parser::parse_program};
//!
//! let program = parse_program("int a = 3; a = a + 4; print(a);").unwrap();
//! let execution = Interpreter::new(program).run();
//!
//! let effects: Vec<_> = execution.channels().effects().collect();
//! assert_eq!(effects, ["Declared var[0] = 3", "Assigned var[0] = 7", "Print: 7"]);
//! ```

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod ui;
