//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: replay state, keyboard event loop, pane focus
//! - **[`panes`]**: render functions for each visible pane (source, tree,
//!   output, symbols, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a finished
//! [`Execution`] and call [`App::run`] to start the event loop.
//!
//! [`Execution`]: crate::interpreter::engine::Execution
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
