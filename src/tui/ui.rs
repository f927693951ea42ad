//! UI rendering helpers for TUI
//!
//! Draws a screen's [`DisplayState`] inside a bordered frame.

use std::ops::Range;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::screen::DisplayState;

/// Glyph drawn for the input cursor.
pub const CURSOR_GLYPH: &str = "\u{2588}";

/// Lines of a `total`-line buffer that fit in `height` rows.
///
/// Top-anchored while everything fits, otherwise the trailing lines.
pub fn visible_range(total: usize, height: usize) -> Range<usize> {
    total.saturating_sub(height)..total
}

/// Render a screen's display state into `area`.
pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    state: &DisplayState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(format!(" {} ", title), theme.accent_bold_style()));
    let inner = block.inner(area);

    let range = visible_range(state.lines.len(), inner.height as usize);
    let last = state.lines.len().saturating_sub(1);
    let lines: Vec<Line> = state.lines[range.clone()]
        .iter()
        .zip(range)
        .map(|(text, index)| {
            let mut spans = vec![Span::styled(text.clone(), theme.text_style())];
            if index == last && state.awaiting_input && state.cursor_visible {
                spans.push(Span::styled(CURSOR_GLYPH, theme.accent_bold_style()));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
