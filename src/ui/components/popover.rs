//! Candidate dropdown rendered under the tag input.
//!
//! The dropdown's width is not taken from the layout directly: a small relay
//! observes the trigger row's width and republishes it, and the dropdown
//! consumes the published value. The relay is synced on every resize event
//! and again on every render pass; the sync is an idempotent compare-and-store
//! so redundant notifications are harmless.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::source::Item;
use crate::ui::theme::theme;

/// Maximum number of candidate rows shown at once.
const MAX_VISIBLE_ITEMS: usize = 8;

/// The latest observed trigger width, republished for the dropdown.
#[derive(Debug, Default)]
pub struct PopoverWidth {
    width: u16,
}

impl PopoverWidth {
    /// Create a relay with no observation yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly observed trigger width.
    ///
    /// Returns true if the published value changed. Re-reporting the same
    /// width is a no-op.
    pub fn sync(&mut self, trigger_width: u16) -> bool {
        if self.width == trigger_width {
            return false;
        }
        self.width = trigger_width;
        true
    }

    /// The last published width.
    pub fn get(&self) -> u16 {
        self.width
    }
}

/// The candidate dropdown.
#[derive(Debug)]
pub struct Popover {
    /// Width relay fed from the trigger row.
    width: PopoverWidth,
    /// Highlighted candidate index.
    highlighted: usize,
    /// List state for ratatui.
    list_state: ListState,
}

impl Popover {
    /// Create a new popover with the highlight on the first candidate.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            width: PopoverWidth::new(),
            highlighted: 0,
            list_state,
        }
    }

    /// The highlighted candidate index.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight up one row, clamped at the top.
    pub fn move_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
            self.list_state.select(Some(self.highlighted));
        }
    }

    /// Move the highlight down one row, clamped at the bottom.
    pub fn move_down(&mut self, candidate_count: usize) {
        if candidate_count > 0 && self.highlighted < candidate_count - 1 {
            self.highlighted += 1;
            self.list_state.select(Some(self.highlighted));
        }
    }

    /// Reset the highlight to the first candidate.
    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
        self.list_state.select(Some(0));
    }

    /// Feed the relay a freshly observed trigger width.
    pub fn sync_width(&mut self, trigger_width: u16) -> bool {
        self.width.sync(trigger_width)
    }

    /// The published dropdown width.
    pub fn width(&self) -> u16 {
        self.width.get()
    }

    /// Render the dropdown under (or above) the trigger row.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        trigger_area: Rect,
        screen_area: Rect,
        candidates: &[&Item],
    ) {
        let t = theme();

        let row_count = candidates.len().max(1);
        let list_height = (row_count.min(MAX_VISIBLE_ITEMS) + 2) as u16;

        // Dropdown width comes from the relay, not the layout.
        let width = if self.width.get() > 0 {
            self.width.get()
        } else {
            trigger_area.width
        };
        let width = width.min(screen_area.width.saturating_sub(trigger_area.x));

        let space_below = screen_area
            .height
            .saturating_sub(trigger_area.y + trigger_area.height);
        let space_above = trigger_area.y.saturating_sub(screen_area.y);

        let list_area = if space_below >= list_height || space_below >= space_above {
            Rect::new(
                trigger_area.x,
                trigger_area.y + trigger_area.height,
                width,
                list_height.min(space_below),
            )
        } else {
            let height = list_height.min(space_above);
            Rect::new(
                trigger_area.x,
                trigger_area.y.saturating_sub(height),
                width,
                height,
            )
        };

        if list_area.width == 0 || list_area.height == 0 {
            return;
        }

        frame.render_widget(Clear, list_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border))
            .style(Style::default().bg(t.popover_bg));

        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        if candidates.is_empty() {
            let empty = Paragraph::new("No matching items").style(Style::default().fg(t.dim));
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem> = candidates
            .iter()
            .map(|item| {
                let mut spans = Vec::new();
                if let Some(avatar) = &item.avatar {
                    spans.push(Span::styled(
                        format!("{} ", avatar),
                        Style::default().fg(t.accent),
                    ));
                }
                spans.push(Span::styled(
                    item.label.clone(),
                    Style::default().fg(t.fg),
                ));
                ListItem::new(Line::from(spans))
            })
            .collect();

        // Keep the highlight in range if the candidate list shrank.
        if self.highlighted >= candidates.len() {
            self.highlighted = candidates.len() - 1;
        }
        self.list_state.select(Some(self.highlighted));

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(t.chip_focused_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, inner, &mut self.list_state);
    }
}

impl Default for Popover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_sync_reports_change() {
        let mut width = PopoverWidth::new();
        assert!(width.sync(240));
        assert_eq!(width.get(), 240);
    }

    #[test]
    fn test_width_sync_is_idempotent() {
        let mut width = PopoverWidth::new();
        width.sync(240);
        assert!(!width.sync(240));
        assert_eq!(width.get(), 240);
    }

    #[test]
    fn test_width_sync_tracks_latest() {
        let mut width = PopoverWidth::new();
        width.sync(240);
        assert!(width.sync(120));
        assert_eq!(width.get(), 120);
    }

    #[test]
    fn test_highlight_clamps_at_bottom() {
        let mut popover = Popover::new();
        popover.move_down(2);
        popover.move_down(2);
        popover.move_down(2);
        assert_eq!(popover.highlighted(), 1);
    }

    #[test]
    fn test_highlight_clamps_at_top() {
        let mut popover = Popover::new();
        popover.move_down(3);
        popover.move_up();
        popover.move_up();
        assert_eq!(popover.highlighted(), 0);
    }

    #[test]
    fn test_highlight_noop_when_empty() {
        let mut popover = Popover::new();
        popover.move_down(0);
        assert_eq!(popover.highlighted(), 0);
    }

    #[test]
    fn test_reset_highlight() {
        let mut popover = Popover::new();
        popover.move_down(5);
        popover.move_down(5);
        popover.reset_highlight();
        assert_eq!(popover.highlighted(), 0);
    }

    #[test]
    fn test_popover_width_flows_through() {
        let mut popover = Popover::new();
        assert_eq!(popover.width(), 0);
        assert!(popover.sync_width(42));
        assert_eq!(popover.width(), 42);
        assert!(!popover.sync_width(42));
    }
}
