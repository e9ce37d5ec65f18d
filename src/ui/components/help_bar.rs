//! Key hint bar shown at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Render a single line of `[key] description` hints.
pub fn render_help_bar(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let t = theme();
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, description)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(t.accent),
        ));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(t.dim),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
