//! Main application state and event loop glue.
//!
//! Follows The Elm Architecture: events flow into [`App::update`], rendering
//! happens in [`App::view`]. Every state transition is synchronous.

use tracing::{debug, info};

use ratatui::Frame;

use crate::events::Event;
use crate::source::ItemSource;
use crate::ui::{PickerAction, PickerView, Selection, TagInput};

/// The outcome of a picking session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Selection accepted; carries the selected ids in insertion order.
    Accepted(Vec<String>),
    /// Session cancelled; nothing should be printed.
    Cancelled,
}

/// The main application struct.
pub struct App {
    /// The picker screen.
    picker: PickerView,
    /// Whether the event loop should stop.
    should_quit: bool,
    /// Set when the session ends.
    outcome: Option<Outcome>,
}

impl App {
    /// Create an application over the given item source.
    pub fn new(source: ItemSource, placeholder: impl Into<String>, preselect: &[String]) -> Self {
        debug!(
            items = source.len(),
            preselected = preselect.len(),
            "creating application"
        );

        let selection = Selection::with_preselected(source, preselect);
        let tag_input = TagInput::new(selection, placeholder);

        Self {
            picker: PickerView::new(tag_input),
            should_quit: false,
            outcome: None,
        }
    }

    /// Seed the filter text before the first keystroke.
    pub fn set_initial_filter(&mut self, text: impl Into<String>) {
        self.picker.set_initial_filter(text);
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The session outcome, once the loop has stopped.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Process one event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                if let Some(action) = self.picker.handle_input(key_event) {
                    match action {
                        PickerAction::Done(ids) => {
                            info!(count = ids.len(), "selection accepted");
                            self.outcome = Some(Outcome::Accepted(ids));
                            self.should_quit = true;
                        }
                        PickerAction::Cancelled => {
                            info!("selection cancelled");
                            self.outcome = Some(Outcome::Cancelled);
                            self.should_quit = true;
                        }
                    }
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.picker.handle_resize(width, height);
            }
            Event::Tick => {}
        }
    }

    /// Render the current state.
    pub fn view(&mut self, frame: &mut Frame) {
        self.picker.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::source::Item;

    fn sample_app() -> App {
        let source = ItemSource::from_items(vec![
            Item::new("1", "Alice"),
            Item::new("2", "Bob"),
            Item::new("3", "Carol"),
        ])
        .unwrap();
        App::new(source, "Search", &[])
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_new_app_is_running() {
        let app = sample_app();
        assert!(!app.should_quit());
        assert!(app.outcome().is_none());
    }

    #[test]
    fn test_select_then_accept() {
        let mut app = sample_app();
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Esc));

        assert!(app.should_quit());
        assert_eq!(
            app.outcome(),
            Some(&Outcome::Accepted(vec![
                "1".to_string(),
                "3".to_string()
            ]))
        );
    }

    #[test]
    fn test_accept_empty_selection() {
        let mut app = sample_app();
        app.update(key(KeyCode::Esc));
        assert_eq!(app.outcome(), Some(&Outcome::Accepted(vec![])));
    }

    #[test]
    fn test_cancel() {
        let mut app = sample_app();
        app.update(key(KeyCode::Enter));
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(app.should_quit());
        assert_eq!(app.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_preselect_seeds_selection() {
        let source = ItemSource::from_items(vec![
            Item::new("1", "Alice"),
            Item::new("2", "Bob"),
        ])
        .unwrap();
        let mut app = App::new(source, "Search", &["2".to_string()]);
        app.update(key(KeyCode::Esc));
        assert_eq!(
            app.outcome(),
            Some(&Outcome::Accepted(vec!["2".to_string()]))
        );
    }

    #[test]
    fn test_tick_is_inert() {
        let mut app = sample_app();
        app.update(Event::Tick);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_resize_flows_to_picker() {
        let mut app = sample_app();
        app.update(Event::Resize(120, 40));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_initial_filter() {
        let mut app = sample_app();
        app.set_initial_filter("bo");
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Esc));
        assert_eq!(
            app.outcome(),
            Some(&Outcome::Accepted(vec!["2".to_string()]))
        );
    }
}
