//! Code input buffer
//!
//! Holds the text the user is editing and hands it over on submit. There is
//! no validation and no size limit; every edit applies synchronously.
//!
//! The cursor is a char index into the buffer (not a byte offset), always in
//! `0..=char_count`.

/// Text shown in the editor before the user types anything
pub const INITIAL_CODE: &str = "print(\"Hello, world!\")";

/// Spaces inserted for a Tab key press
const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInput {
    text: String,
    cursor: usize,
}

impl Default for CodeInput {
    fn default() -> Self {
        Self::new(INITIAL_CODE)
    }
}

impl CodeInput {
    /// Buffer holding `text` with the cursor at its end
    pub fn new(text: impl Into<String>) -> Self {
        let mut input = Self {
            text: String::new(),
            cursor: 0,
        };
        input.set_text(text);
        input
    }

    /// The text that a submit would send
    pub fn current_text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer; cursor moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_tab(&mut self) {
        self.insert_str(&" ".repeat(TAB_WIDTH));
    }

    /// Delete the char before the cursor
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.index_of(line, 0);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.index_of(line, usize::MAX);
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line > 0 {
            self.cursor = self.index_of(line - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line + 1 < self.line_count() {
            self.cursor = self.index_of(line + 1, col);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Layout helpers (used by the editor widget)
    // ─────────────────────────────────────────────────────────

    /// Lines of the buffer; a trailing newline yields a final empty line
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Zero-based (line, column) of the cursor, column counted in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Char index of (`line`, `col`), with `col` clamped to the line length
    fn index_of(&self, line: usize, col: usize) -> usize {
        let mut index = 0;
        for (i, text) in self.text.split('\n').enumerate() {
            let len = text.chars().count();
            if i == line {
                return index + col.min(len);
            }
            index += len + 1;
        }
        self.char_count()
    }
}
