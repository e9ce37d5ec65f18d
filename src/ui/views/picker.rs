//! The picker screen.
//!
//! Lays out the tag input, its candidate dropdown, a one-line status area
//! fed by insert/clear notifications, and the key hint bar.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info};

use crate::ui::components::{render_help_bar, TagInput, TagInputAction};
use crate::ui::theme::theme;

/// Horizontal margin around the picker content.
const H_MARGIN: u16 = 1;

/// Action resulting from picker input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// The user accepted; carries the selected ids in insertion order.
    Done(Vec<String>),
    /// The user cancelled.
    Cancelled,
}

/// The picker view.
pub struct PickerView {
    /// The tag input widget.
    tag_input: TagInput,
    /// Last insert/clear notification, shown under the input.
    status: Option<String>,
}

impl PickerView {
    /// Create a picker over the given tag input.
    pub fn new(tag_input: TagInput) -> Self {
        Self {
            tag_input,
            status: None,
        }
    }

    /// The selected ids, in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.tag_input.selected_ids()
    }

    /// Seed the filter text before the first keystroke.
    pub fn set_initial_filter(&mut self, text: impl Into<String>) {
        self.tag_input.set_initial_filter(text);
    }

    /// The current status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Borrow the tag input.
    pub fn tag_input(&self) -> &TagInput {
        &self.tag_input
    }

    /// Handle a key event.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<PickerAction> {
        match self.tag_input.handle_input(key)? {
            TagInputAction::Inserted(id) => {
                info!(id = %id, "item inserted");
                self.status = Some(self.describe("Added", &id));
                None
            }
            TagInputAction::Cleared(id) => {
                info!(id = %id, "item cleared");
                self.status = Some(self.describe("Removed", &id));
                None
            }
            TagInputAction::Accept => Some(PickerAction::Done(self.tag_input.selected_ids())),
            TagInputAction::Cancel => Some(PickerAction::Cancelled),
        }
    }

    /// Handle a terminal resize.
    ///
    /// Republishes the dropdown width from the new trigger width. The render
    /// pass would catch this too; doing it here keeps the published value
    /// fresh even when no frame is drawn in between.
    pub fn handle_resize(&mut self, width: u16, _height: u16) {
        let trigger_width = width.saturating_sub(2 * H_MARGIN);
        if self.tag_input.sync_popover_width(trigger_width) {
            debug!(width = trigger_width, "popover width resynced");
        }
    }

    /// Build a status message, preferring the item label over the raw id.
    fn describe(&self, verb: &str, id: &str) -> String {
        match self.tag_input.selection().item(id) {
            Some(item) => format!("{} {}", verb, item.label),
            None => format!("{} {}", verb, id),
        }
    }

    /// Render the picker.
    pub fn render(&mut self, frame: &mut Frame) {
        let t = theme();
        let screen = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(H_MARGIN)
            .constraints([
                Constraint::Length(3), // tag input group
                Constraint::Min(1),    // dropdown overlay space
                Constraint::Length(1), // status line
                Constraint::Length(1), // help bar
            ])
            .split(screen);

        self.tag_input.render(frame, chunks[0], screen);

        if let Some(status) = &self.status {
            frame.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(t.dim)),
                chunks[2],
            );
        }

        render_help_bar(
            frame,
            chunks[3],
            &[
                ("Type", "filter"),
                ("↑/↓", "highlight"),
                ("Enter", "select"),
                ("←/→", "chips"),
                ("Bksp", "remove chip"),
                ("Esc", "done"),
                ("^C", "cancel"),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::source::{Item, ItemSource};
    use crate::ui::components::Selection;

    fn sample_view() -> PickerView {
        let source =
            ItemSource::from_items(vec![Item::new("1", "Alice"), Item::new("2", "Bob")]).unwrap();
        PickerView::new(TagInput::new(Selection::new(source), "Search"))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_updates_status() {
        let mut view = sample_view();
        let action = view.handle_input(key(KeyCode::Enter));
        assert!(action.is_none());
        assert_eq!(view.status(), Some("Added Alice"));
        assert_eq!(view.selected_ids(), vec!["1"]);
    }

    #[test]
    fn test_remove_updates_status() {
        let mut view = sample_view();
        view.handle_input(key(KeyCode::Enter));
        view.handle_input(key(KeyCode::Left));
        view.handle_input(key(KeyCode::Backspace));
        assert_eq!(view.status(), Some("Removed Alice"));
    }

    #[test]
    fn test_escape_reports_selection() {
        let mut view = sample_view();
        view.handle_input(key(KeyCode::Enter));
        let action = view.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(PickerAction::Done(vec!["1".to_string()])));
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut view = sample_view();
        let action = view.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Some(PickerAction::Cancelled));
    }

    #[test]
    fn test_resize_feeds_width_relay() {
        let mut view = sample_view();
        view.handle_resize(82, 24);
        assert_eq!(view.tag_input().popover_width(), 80);

        // A second identical notification changes nothing.
        view.handle_resize(82, 24);
        assert_eq!(view.tag_input().popover_width(), 80);
    }
}
