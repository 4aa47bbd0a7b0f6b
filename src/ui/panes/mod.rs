//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code with syntax highlighting and current line indicator
//! - [`tree`]: Rendered tree of the statement at the replay cursor
//! - [`output`]: Effects and diagnostics produced so far
//! - [`symbols`]: Symbol store contents with variable names
//! - [`status`]: Status bar with keybindings and replay state
//!
//! Each pane module exports a primary `render_*` function; scrollable panes
//! take their scroll offset by `&mut` and clamp it to the content.

pub mod output;
pub mod source;
pub mod status;
pub mod symbols;
pub mod tree;

pub use output::render_output_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
pub use symbols::{render_symbols_pane, symbol_rows, SymbolRow};
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all boxed panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
