use unicode_width::UnicodeWidthStr;

/// Single-line text buffer with a character-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field holding `text` with the cursor at its end.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor, for placing a terminal
    /// cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let byte_index = self.byte_index(self.cursor - 1);
            self.text.remove(byte_index);
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.text.chars().take(chars).map(|c| c.len_utf8()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_at_cursor() {
        let mut field = TextField::new();
        for c in "milk".chars() {
            field.insert_char(c);
        }
        field.move_cursor_home();
        for c in "Buy ".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.text(), "Buy milk");
        assert_eq!(field.cursor(), 4);

        field.delete_char();
        assert_eq!(field.text(), "Buymilk");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut field = TextField::with_text("ab");
        field.move_cursor_right();
        assert_eq!(field.cursor(), 2);

        field.move_cursor_left();
        field.move_cursor_left();
        field.move_cursor_left();
        assert_eq!(field.cursor(), 0);

        field.delete_char();
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_multibyte_text() {
        let mut field = TextField::with_text("café");
        field.delete_char();
        assert_eq!(field.text(), "caf");

        let mut field = TextField::with_text("牛乳");
        assert_eq!(field.cursor(), 2);
        assert_eq!(field.cursor_column(), 4);
        field.move_cursor_left();
        field.insert_char('x');
        assert_eq!(field.text(), "牛x乳");
    }

    #[test]
    fn test_blank() {
        assert!(TextField::new().is_blank());
        assert!(TextField::with_text("   ").is_blank());
        assert!(!TextField::with_text(" a ").is_blank());
    }
}
