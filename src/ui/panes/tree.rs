//! Tree pane: the trace block of the statement at the replay cursor

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the tree pane. `block_text` is `None` before the first statement.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    block_text: Option<&str>,
    statement_label: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match statement_label {
        Some(label) => format!(" Statement Tree ({}) ", label),
        None => " Statement Tree ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(text) = block_text else {
        let paragraph = Paragraph::new("(no statement executed yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<Line> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(tree_line)
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(paragraph, area);
}

/// Colour one rendered tree line by the kind of label it carries
fn tree_line(line: &str) -> Line<'static> {
    let label = line.trim_start();
    let indent = &line[..line.len() - label.len()];

    let style = if label.starts_with("INTEGER(") {
        Style::default().fg(DEFAULT_THEME.number)
    } else if label.starts_with("VAR(") {
        Style::default().fg(DEFAULT_THEME.variable)
    } else if label.starts_with('-') && label.chars().all(|c| c == '-') && label.len() > 2 {
        Style::default().fg(DEFAULT_THEME.comment)
    } else if label.chars().all(|c| c.is_ascii_lowercase()) {
        Style::default()
            .fg(DEFAULT_THEME.tree_label)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(label.to_string(), style),
    ])
}
