//! Input box where the user pastes the text to check.

use ratatui::prelude::{Buffer, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Paste a suspicious link or message here...";

/// Multi-line text buffer with a cursor, counted in chars.
#[derive(Debug, Default)]
pub struct TuiInput {
    buffer: String,
    cursor: usize,
}

impl TuiInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor. Line endings are normalized to `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let idx = self.byte_index(self.cursor);
        self.buffer.insert_str(idx, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Backspace.
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.buffer.remove(idx);
    }

    /// Delete.
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(self.char_count());
    }

    /// Move to the start of the current line.
    pub fn move_cursor_to_start(&mut self) {
        let before: Vec<char> = self.buffer.chars().take(self.cursor).collect();
        let line_start = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.cursor = line_start;
    }

    /// Move to the end of the current line.
    pub fn move_cursor_to_end(&mut self) {
        let rest = self
            .buffer
            .chars()
            .skip(self.cursor)
            .take_while(|&c| c != '\n')
            .count();
        self.cursor += rest;
    }

    /// Cursor position as (display column, line) relative to the text start.
    pub fn cursor_offset(&self) -> (u16, u16) {
        let prefix = &self.buffer[..self.byte_index(self.cursor)];
        let row = prefix.matches('\n').count();
        let current_line = prefix.rsplit('\n').next().unwrap_or("");
        let col = current_line.width();
        (clamp_u16(col), clamp_u16(row))
    }

    /// Lines scrolled off the top so that the cursor line stays visible.
    fn scroll_offset(&self, visible_rows: u16) -> u16 {
        let (_, row) = self.cursor_offset();
        row.saturating_sub(visible_rows.saturating_sub(1))
    }

    /// Absolute terminal position of the cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (col, row) = self.cursor_offset();
        let row = row - self.scroll_offset(inner.height);
        let col = col.min(inner.width.saturating_sub(1));
        Some((inner.x + col, inner.y + row))
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(" Text to check ")
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Widget for &TuiInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = TuiInput::block();
        let inner = block.inner(area);
        block.render(area, buf);

        if self.is_empty() {
            Paragraph::new(Line::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self.buffer.split('\n').map(Line::raw).collect();
        Paragraph::new(lines)
            .scroll((self.scroll_offset(inner.height), 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(text: &str) -> TuiInput {
        let mut input = TuiInput::new();
        input.insert_str(text);
        input
    }

    #[test]
    fn test_insert_and_delete() {
        let mut input = TuiInput::new();
        input.insert_char('o');
        input.insert_char('t');
        input.insert_char('p');
        assert_eq!(input.text(), "otp");

        input.delete_char();
        assert_eq!(input.text(), "ot");

        input.move_cursor(-2);
        input.delete_char_forward();
        assert_eq!(input.text(), "t");

        input.delete_char();
        assert_eq!(input.text(), "t");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut input = input_with("abc");
        input.move_cursor(10);
        assert_eq!(input.cursor_offset(), (3, 0));
        input.move_cursor(-10);
        assert_eq!(input.cursor_offset(), (0, 0));
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let input = input_with("line one\r\nline two\rline three");
        assert_eq!(input.text(), "line one\nline two\nline three");
        assert_eq!(input.cursor_offset(), (10, 2));
    }

    #[test]
    fn test_home_and_end_stay_on_current_line() {
        let mut input = input_with("first\nsecond");
        input.move_cursor(-3);
        input.move_cursor_to_start();
        assert_eq!(input.cursor_offset(), (0, 1));
        input.move_cursor_to_end();
        assert_eq!(input.cursor_offset(), (6, 1));
    }

    #[test]
    fn test_multibyte_text() {
        let mut input = input_with("päss");
        input.move_cursor(-3);
        input.delete_char();
        assert_eq!(input.text(), "äss");
        input.insert_char('ü');
        assert_eq!(input.text(), "üäss");
    }

    #[test]
    fn test_wide_chars_take_two_columns() {
        let input = input_with("你好");
        assert_eq!(input.cursor_offset(), (4, 0));
    }

    #[test]
    fn test_cursor_position_scrolls_with_long_input() {
        let input = input_with("1\n2\n3\n4\n5");
        // Three visible rows inside the borders.
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(input.cursor_position(area), Some((2, 3)));
    }

    #[test]
    fn test_clear() {
        let mut input = input_with("something");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_offset(), (0, 0));
    }
}
