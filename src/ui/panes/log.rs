//! Move log pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the move log, keeping the newest entries in view
///
/// `scroll_offset` is clamped in place; pass `usize::MAX` to follow the tail.
pub fn render_log_pane(frame: &mut Frame, area: Rect, entries: &[String], scroll_offset: &mut usize) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no moves yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if entries.len() > visible_height {
        let max_scroll = entries.len() - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let last = entries.len() - 1;
    let visible_items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, entry)| {
            let style = if i == last {
                Style::default()
                    .fg(DEFAULT_THEME.moved_disk)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(entry.as_str()).style(style)
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
