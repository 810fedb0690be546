//! Single-line text input state.
//!
//! Pure editing state (content + cursor); rendering lives in
//! `crate::ui::components::input_field`.

/// Editable single-line text buffer with a cursor.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position as a character index into `content`.
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    /// Delete the character at the cursor (Delete).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
