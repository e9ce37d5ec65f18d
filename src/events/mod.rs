//! Event handling for the application.
//!
//! Terminal input is polled synchronously; every state transition happens
//! inside the handler for the event that caused it.

mod handler;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
}
