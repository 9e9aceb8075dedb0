//! Board pane rendering
//!
//! Draws the rows produced by [`render::board`] inside a bordered block,
//! centred horizontally and anchored to the bottom so the disks rest on the
//! base line.

use crate::render::{self, Row};
use crate::tower::PegState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Convert a board row into a styled line
pub fn board_line(row: &Row) -> Line<'static> {
    let spans: Vec<Span<'static>> = row
        .segments()
        .iter()
        .map(|seg| Span::styled(seg.text.clone(), DEFAULT_THEME.tone(seg.tone)))
        .collect();
    Line::from(spans)
}

/// Render the board pane
pub fn render_board_pane(frame: &mut Frame, area: Rect, state: &PegState) {
    let block = Block::default()
        .title(format!(" Tower ({} disks) ", state.disks()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let mut lines: Vec<Line> = render::board(state).iter().map(board_line).collect();

    // Pad above the board so it sits at the bottom of the pane
    let inner_height = area.height.saturating_sub(2) as usize;
    if lines.len() < inner_height {
        let mut padded = vec![Line::default(); inner_height - lines.len()];
        padded.append(&mut lines);
        lines = padded;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
