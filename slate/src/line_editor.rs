//! Single-line text editing state.
//!
//! Encapsulates the text and cursor of an editable field so widgets do not
//! implement cursor movement and deletion themselves. The cursor is a char
//! offset; all operations convert to byte offsets internally, so multi-byte
//! input is safe.

use crate::event::{Key, KeyEvent, NamedKey};

/// Result of feeding a key event to a `LineEditor`.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Text or cursor was modified.
    Changed,
    /// Enter pressed. Contains the submitted text; the editor is cleared.
    Submit(String),
    /// Escape pressed - request blur.
    Blur,
    /// No action taken.
    Noop,
}

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Clear text and cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    // =====================================================================
    // Editing operations
    // =====================================================================

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let byte_pos = char_to_byte(&self.text, self.cursor);
        self.text.insert_str(byte_pos, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte(&self.text, self.cursor);
            let next_byte = char_to_byte(&self.text, self.cursor + 1);
            self.text.replace_range(byte_pos..next_byte, "");
        }
    }

    /// Delete the character at the cursor (Delete key).
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let byte_pos = char_to_byte(&self.text, self.cursor);
            let next_byte = char_to_byte(&self.text, self.cursor + 1);
            self.text.replace_range(byte_pos..next_byte, "");
        }
    }

    /// Delete one word backwards (Ctrl+W).
    pub fn delete_word_back(&mut self) {
        let target = word_boundary_left(&self.text, self.cursor);
        if target < self.cursor {
            let lo_byte = char_to_byte(&self.text, target);
            let hi_byte = char_to_byte(&self.text, self.cursor);
            self.text.replace_range(lo_byte..hi_byte, "");
            self.cursor = target;
        }
    }

    // =====================================================================
    // Cursor movement
    // =====================================================================

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = word_boundary_left(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = word_boundary_right(&self.text, self.cursor);
    }

    // =====================================================================
    // High-level key handler
    // =====================================================================

    /// Handle a key event, performing the appropriate mutation.
    ///
    /// Enter submits the current text and clears the editor; Escape asks the
    /// owner to blur. Character keys insert the OS-provided text when
    /// present (it already accounts for shift and compose sequences).
    pub fn handle_key(&mut self, event: &KeyEvent) -> EditAction {
        let (key, modifiers, text) = match event {
            KeyEvent::Pressed { key, modifiers, text } => (key, modifiers, text.as_deref()),
            KeyEvent::Released { .. } => return EditAction::Noop,
        };

        // Ctrl+key - readline-style editing
        if modifiers.ctrl {
            return match key {
                Key::Character(c) if c == "a" => {
                    self.move_home();
                    EditAction::Changed
                }
                Key::Character(c) if c == "e" => {
                    self.move_end();
                    EditAction::Changed
                }
                Key::Character(c) if c == "w" => {
                    self.delete_word_back();
                    EditAction::Changed
                }
                _ => EditAction::Noop,
            };
        }

        // Alt+Arrow - word jumps
        if modifiers.alt {
            return match key {
                Key::Named(NamedKey::ArrowLeft) => {
                    self.move_word_left();
                    EditAction::Changed
                }
                Key::Named(NamedKey::ArrowRight) => {
                    self.move_word_right();
                    EditAction::Changed
                }
                Key::Named(NamedKey::Backspace) => {
                    self.delete_word_back();
                    EditAction::Changed
                }
                _ => EditAction::Noop,
            };
        }

        match key {
            Key::Named(NamedKey::Escape) => EditAction::Blur,
            Key::Named(NamedKey::Enter) => {
                let submitted = std::mem::take(&mut self.text);
                self.cursor = 0;
                EditAction::Submit(submitted)
            }
            Key::Named(NamedKey::Backspace) => {
                self.backspace();
                EditAction::Changed
            }
            Key::Named(NamedKey::Delete) => {
                self.delete();
                EditAction::Changed
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.move_left();
                EditAction::Changed
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.move_right();
                EditAction::Changed
            }
            Key::Named(NamedKey::Home) => {
                self.move_home();
                EditAction::Changed
            }
            Key::Named(NamedKey::End) => {
                self.move_end();
                EditAction::Changed
            }
            Key::Character(_) | Key::Named(NamedKey::Space) => {
                // Prefer OS-provided text for character insertion.
                if let Some(t) = text {
                    if !t.is_empty() {
                        self.insert_str(t);
                        return EditAction::Changed;
                    }
                }
                if let Key::Character(c) = key {
                    self.insert_str(c);
                } else {
                    self.insert_str(" ");
                }
                EditAction::Changed
            }
            _ => EditAction::Noop,
        }
    }
}

// =========================================================================
// Helper functions
// =========================================================================

/// Convert a char offset to a byte offset in the string.
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Find the word boundary to the left of `pos`.
///
/// Skips whitespace/punctuation, then skips word characters.
fn word_boundary_left(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let chars: Vec<char> = text.chars().collect();
    let mut i = pos;
    while i > 0 && !chars[i - 1].is_alphanumeric() && chars[i - 1] != '_' {
        i -= 1;
    }
    while i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_') {
        i -= 1;
    }
    i
}

/// Find the word boundary to the right of `pos`.
///
/// Skips word characters, then skips whitespace/punctuation.
fn word_boundary_right(text: &str, pos: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut i = pos;
    while i < len && (chars[i].is_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    while i < len && !chars[i].is_alphanumeric() && chars[i] != '_' {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    fn press(key: Key) -> KeyEvent {
        KeyEvent::Pressed {
            key,
            modifiers: Modifiers::NONE,
            text: None,
        }
    }

    fn type_char(c: &str) -> KeyEvent {
        KeyEvent::Pressed {
            key: Key::character(c),
            modifiers: Modifiers::NONE,
            text: Some(c.to_string()),
        }
    }

    #[test]
    fn insert_and_cursor() {
        let mut editor = LineEditor::new();
        editor.insert_str("hello");
        assert_eq!(editor.text(), "hello");
        assert_eq!(editor.cursor(), 5);

        editor.move_left();
        editor.move_left();
        editor.move_left();
        editor.insert_str("XY");
        assert_eq!(editor.text(), "heXYllo");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete() {
        let mut editor = LineEditor::with_text("abcde");
        editor.move_left();
        editor.move_left();

        editor.backspace();
        assert_eq!(editor.text(), "abde");
        assert_eq!(editor.cursor(), 2);

        editor.delete();
        assert_eq!(editor.text(), "abe");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut editor = LineEditor::with_text("ab");
        editor.move_home();
        editor.backspace();
        assert_eq!(editor.text(), "ab");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn multibyte_input_is_safe() {
        let mut editor = LineEditor::new();
        editor.insert_str("héllo");
        assert_eq!(editor.cursor(), 5);
        editor.move_home();
        editor.move_right();
        editor.delete();
        assert_eq!(editor.text(), "hllo");
    }

    #[test]
    fn word_operations() {
        let mut editor = LineEditor::with_text("hello world foo");
        editor.move_word_left();
        assert_eq!(editor.cursor(), 12); // start of "foo"
        editor.move_word_left();
        assert_eq!(editor.cursor(), 6); // start of "world"

        editor.move_end();
        editor.delete_word_back();
        assert_eq!(editor.text(), "hello world ");
    }

    #[test]
    fn handle_key_inserts_and_deletes() {
        let mut editor = LineEditor::new();
        assert_eq!(editor.handle_key(&type_char("a")), EditAction::Changed);
        assert_eq!(editor.handle_key(&type_char("b")), EditAction::Changed);
        assert_eq!(editor.text(), "ab");

        assert_eq!(
            editor.handle_key(&press(Key::named(NamedKey::Backspace))),
            EditAction::Changed
        );
        assert_eq!(editor.text(), "a");
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut editor = LineEditor::with_text("query");
        let action = editor.handle_key(&press(Key::named(NamedKey::Enter)));
        assert_eq!(action, EditAction::Submit("query".to_string()));
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn escape_requests_blur() {
        let mut editor = LineEditor::with_text("x");
        assert_eq!(
            editor.handle_key(&press(Key::named(NamedKey::Escape))),
            EditAction::Blur
        );
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn release_events_are_noops() {
        let mut editor = LineEditor::new();
        let released = KeyEvent::Released {
            key: Key::character("a"),
            modifiers: Modifiers::NONE,
        };
        assert_eq!(editor.handle_key(&released), EditAction::Noop);
        assert!(editor.is_empty());
    }

    #[test]
    fn ctrl_w_deletes_word() {
        let mut editor = LineEditor::with_text("hello world");
        let event = KeyEvent::Pressed {
            key: Key::character("w"),
            modifiers: Modifiers::CTRL,
            text: None,
        };
        assert_eq!(editor.handle_key(&event), EditAction::Changed);
        assert_eq!(editor.text(), "hello ");
    }
}
