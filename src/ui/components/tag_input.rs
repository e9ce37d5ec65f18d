//! The tag input widget.
//!
//! A single row holding the selected items as chips followed by the filter
//! text input, with the candidate dropdown hanging underneath. Keyboard
//! events are dispatched by focus domain: chip keys remove and navigate,
//! input keys edit the filter and drive the candidate highlight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::source::Item;
use crate::ui::components::filter_input::FilterInput;
use crate::ui::components::focus::{Focus, FocusRing};
use crate::ui::components::popover::Popover;
use crate::ui::components::selection::{Selection, SelectionEvent};
use crate::ui::theme::theme;

/// Action resulting from tag input handling, reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInputAction {
    /// An item was added to the selection (item id).
    Inserted(String),
    /// An item was removed from the selection (item id).
    Cleared(String),
    /// The user accepted the current selection.
    Accept,
    /// The user cancelled without accepting.
    Cancel,
}

/// Tag-based multi-select input.
pub struct TagInput {
    /// Selection state (selected set, filter, candidates).
    selection: Selection,
    /// Focus position over chips and the input.
    focus: FocusRing,
    /// Filter text editing state.
    input: FilterInput,
    /// Candidate dropdown.
    popover: Popover,
    /// Placeholder shown while the filter is empty.
    placeholder: String,
}

impl TagInput {
    /// Create a new tag input over the given selection.
    pub fn new(selection: Selection, placeholder: impl Into<String>) -> Self {
        Self {
            selection,
            focus: FocusRing::new(),
            input: FilterInput::new(),
            popover: Popover::new(),
            placeholder: placeholder.into(),
        }
    }

    /// Seed the filter text before the first keystroke.
    pub fn set_initial_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.input.set_value(text.clone());
        self.selection.set_filter_text(text);
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected ids, in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected_ids()
    }

    /// The current focus position.
    pub fn focus(&self) -> Focus {
        self.focus.focus()
    }

    /// The candidate highlight position.
    pub fn highlighted(&self) -> usize {
        self.popover.highlighted()
    }

    /// Feed the popover width relay a freshly observed trigger width.
    pub fn sync_popover_width(&mut self, trigger_width: u16) -> bool {
        self.popover.sync_width(trigger_width)
    }

    /// The currently published dropdown width.
    pub fn popover_width(&self) -> u16 {
        self.popover.width()
    }

    /// Handle a key event.
    ///
    /// Returns an action for the host when the selection changed or the
    /// session ended; navigation and plain editing return `None`.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<TagInputAction> {
        // Session keys work regardless of focus.
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return Some(TagInputAction::Accept),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(TagInputAction::Cancel),
            _ => {}
        }

        match self.focus.focus() {
            Focus::Chip(idx) => self.handle_chip_key(key, idx),
            Focus::Input => self.handle_text_key(key),
        }
    }

    /// Keys while a chip has focus. Everything not matched here is
    /// swallowed; chip focus never edits the filter text.
    fn handle_chip_key(&mut self, key: KeyEvent, idx: usize) -> Option<TagInputAction> {
        let chip_count = self.selection.selected_count();
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Backspace => {
                let Some(item) = self.selection.selected().get(idx) else {
                    self.focus.clamp(chip_count);
                    return None;
                };
                let id = item.id.clone();
                self.focus.after_removal(idx, chip_count);
                match self.selection.remove(&id)? {
                    SelectionEvent::Cleared(id) => Some(TagInputAction::Cleared(id)),
                    SelectionEvent::Inserted(_) => None,
                }
            }
            KeyCode::Left => {
                self.focus.move_previous(chip_count);
                None
            }
            KeyCode::Right => {
                self.focus.move_next(chip_count);
                None
            }
            _ => None,
        }
    }

    /// Keys while the text input has focus.
    fn handle_text_key(&mut self, key: KeyEvent) -> Option<TagInputAction> {
        let chip_count = self.selection.selected_count();
        let at_boundary = self.input.is_caret_at_start() && self.input.is_empty();

        match key.code {
            KeyCode::Backspace | KeyCode::Left if at_boundary => {
                self.focus.move_previous(chip_count);
                return None;
            }
            // The input is the last focus position, so this stays put; kept
            // for symmetry with the chip-side transitions.
            KeyCode::Right if at_boundary => {
                self.focus.move_next(chip_count);
                return None;
            }
            KeyCode::Up => {
                self.popover.move_up();
                return None;
            }
            KeyCode::Down => {
                self.popover.move_down(self.selection.candidate_count());
                return None;
            }
            KeyCode::Enter => return self.commit_highlighted(),
            _ => {}
        }

        if self.input.handle_key(key) {
            self.selection.set_filter_text(self.input.value());
            self.popover.reset_highlight();
        }
        None
    }

    /// Commit the highlighted candidate into the selection.
    fn commit_highlighted(&mut self) -> Option<TagInputAction> {
        let id = {
            let candidates = self.selection.candidates();
            candidates
                .get(self.popover.highlighted())
                .map(|item| item.id.clone())
        }?;

        let event = self.selection.select(&id)?;
        // The controller cleared its filter text; mirror that in the widget.
        self.input.clear();
        self.popover.reset_highlight();
        match event {
            SelectionEvent::Inserted(id) => Some(TagInputAction::Inserted(id)),
            SelectionEvent::Cleared(_) => None,
        }
    }

    /// Render the chip row and input into `area`, and the candidate
    /// dropdown underneath it.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, screen_area: Rect) {
        let t = theme();

        let title = if self.selection.selected_count() == 0 {
            " Items ".to_string()
        } else {
            format!(" Items ({}) ", self.selection.selected_count())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_focused));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans: Vec<Span> = Vec::new();
        let mut used_width: u16 = 0;

        for (idx, item) in self.selection.selected().iter().enumerate() {
            let text = chip_text(item);
            let style = if self.focus.focus() == Focus::Chip(idx) {
                Style::default()
                    .fg(t.chip_focused_fg)
                    .bg(t.chip_focused_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.chip_fg).bg(t.chip_bg)
            };
            used_width += text.width() as u16 + 1;
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        if self.input.is_empty() && self.focus.on_input() {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(t.placeholder),
            ));
        } else {
            spans.push(Span::styled(
                self.input.value().to_string(),
                Style::default().fg(t.fg),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        // Place the terminal cursor inside the input when it has focus.
        if self.focus.on_input() {
            let cursor_x = inner.x + used_width + self.input.width_before_cursor();
            if cursor_x < inner.x + inner.width {
                frame.set_cursor_position(Position::new(cursor_x, inner.y));
            }
        }

        // The dropdown consumes the relayed width; refresh it here as well
        // so a layout change without a resize event still propagates.
        self.sync_popover_width(area.width);
        let candidates: Vec<&Item> = self.selection.candidates();
        self.popover.render(frame, area, screen_area, &candidates);
    }
}

/// Chip display text: optional avatar badge, then the label.
fn chip_text(item: &Item) -> String {
    match &item.avatar {
        Some(avatar) => format!(" {} {} ", avatar, item.label),
        None => format!(" {} ", item.label),
    }
}
