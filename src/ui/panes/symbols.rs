//! Symbol store pane rendering

use super::border_style;
use crate::memory::SymbolStore;
use crate::parser::ast::VarId;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// One row of the symbols table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRow {
    pub id: VarId,
    pub name: String,
    pub value: i32,
    pub written: bool,
    /// Value differs from the previous step
    pub changed: bool,
}

/// Build the rows shown for `store`, comparing against the previous step's store
pub fn symbol_rows(
    store: &SymbolStore,
    previous: Option<&SymbolStore>,
    names: &[String],
) -> Vec<SymbolRow> {
    store
        .iter()
        .map(|(id, value, written)| SymbolRow {
            id,
            name: names.get(id).cloned().unwrap_or_else(|| format!("#{}", id)),
            value,
            written,
            changed: previous.is_some_and(|prev| {
                prev.read(id) != value || prev.is_written(id) != written
            }),
        })
        .collect()
}

/// Render the symbols pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[SymbolRow],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Symbols ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if rows.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(rows.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let name_width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            let value_style = if row.changed {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if row.written {
                Style::default().fg(DEFAULT_THEME.number)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            Line::from(vec![
                Span::styled(
                    format!("var[{:>3}] ", row.id),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<width$}", row.name, width = name_width),
                    Style::default().fg(DEFAULT_THEME.variable),
                ),
                Span::raw(" = "),
                Span::styled(row.value.to_string(), value_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_rows_mark_changes() {
        let names = vec!["a".to_string(), "b".to_string()];
        let before = SymbolStore::new(2);
        let mut after = before.clone();
        after.write(1, 5).unwrap();

        let rows = symbol_rows(&after, Some(&before), &names);
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].changed && !rows[0].written);
        assert!(rows[1].changed && rows[1].written);
        assert_eq!(rows[1].name, "b");
        assert_eq!(rows[1].value, 5);

        let first = symbol_rows(&after, None, &names);
        assert!(first.iter().all(|row| !row.changed));
    }
}
