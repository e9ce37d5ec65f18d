//! Filter text input state.
//!
//! Pure editing state for the tag input's text field: value, caret, and the
//! usual editing keys. The caret is a character index, so multi-byte labels
//! edit correctly. Rendering is done by the owning widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable filter text with a caret.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    /// The current value.
    value: String,
    /// Caret position in characters.
    cursor: usize,
}

impl FilterInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the caret to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Caret position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check whether the caret sits before the first character.
    pub fn is_caret_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Display columns occupied by the text before the caret.
    pub fn width_before_cursor(&self) -> u16 {
        self.value[..self.byte_index(self.cursor)].width() as u16
    }

    /// Byte offset of the given character index.
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle an editing key.
    ///
    /// Returns true if the value changed. Caret movement alone returns false.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // Character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            // Backspace - delete character before caret
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            // Delete - delete character at caret
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.chars().count();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if !self.value.is_empty() {
                    self.clear();
                    true
                } else {
                    false
                }
            }
            // Ctrl+W - delete word before caret
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor > 0 {
                    let end = self.byte_index(self.cursor);
                    let before = &self.value[..end];
                    let word_start = before
                        .rfind(|c: char| !c.is_alphanumeric())
                        .map(|i| i + 1)
                        .unwrap_or(0);
                    let removed = self.value[word_start..end].chars().count();
                    self.value.replace_range(word_start..end, "");
                    self.cursor -= removed;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_new_input() {
        let input = FilterInput::new();
        assert!(input.is_empty());
        assert!(input.is_caret_at_start());
    }

    #[test]
    fn test_character_input() {
        let mut input = FilterInput::new();
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = FilterInput::new();
        input.set_value("abc");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_backspace_at_start_does_nothing() {
        let mut input = FilterInput::new();
        input.set_value("abc");
        input.handle_key(key(KeyCode::Home));
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_delete_at_caret() {
        let mut input = FilterInput::new();
        input.set_value("abc");
        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_caret_movement_clamps() {
        let mut input = FilterInput::new();
        input.set_value("ab");

        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.cursor(), 2);

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
        assert!(input.is_caret_at_start());
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = FilterInput::new();
        input.set_value("ac");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = FilterInput::new();
        input.set_value("José");
        assert_eq!(input.cursor(), 4);

        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "Jos");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Char('ö')));
        assert_eq!(input.value(), "Jöos");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = FilterInput::new();
        input.set_value("hello");
        assert!(input.handle_key(ctrl('u')));
        assert!(input.is_empty());
        assert!(!input.handle_key(ctrl('u')));
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut input = FilterInput::new();
        input.set_value("hello world");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.value(), "hello ");
    }

    #[test]
    fn test_width_before_cursor() {
        let mut input = FilterInput::new();
        input.set_value("ab");
        assert_eq!(input.width_before_cursor(), 2);
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.width_before_cursor(), 1);
    }
}
