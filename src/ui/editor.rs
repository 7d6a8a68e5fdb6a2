//! Multi-line SQL input
//!
//! A small line-based editor: enough for typing and pasting ad-hoc
//! queries, without an undo stack or syntax highlighting.

use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct QueryEditor {
    lines: Vec<String>,
    /// Cursor position: (line index, byte column within the line)
    row: usize,
    col: usize,
}

impl QueryEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Full editor content joined with newlines
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.lines.len() - 1;
        self.col = self.lines[self.row].len();
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }

    /// Insert pasted text at the cursor
    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.insert_newline();
            } else if c != '\r' {
                self.insert_char(c);
            }
        }
    }

    /// Handle a key event. Returns true when the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Up => {
                self.move_up();
                true
            }
            KeyCode::Down => {
                self.move_down();
                true
            }
            KeyCode::Home => {
                self.col = 0;
                true
            }
            KeyCode::End => {
                self.col = self.lines[self.row].len();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        self.lines[self.row].insert(self.col, c);
        self.col += c.len_utf8();
    }

    fn insert_newline(&mut self) {
        let tail = self.lines[self.row].split_off(self.col);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let prev = prev_char_boundary(&self.lines[self.row], self.col);
            self.lines[self.row].remove(prev);
            self.col = prev;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&line);
        }
    }

    fn delete(&mut self) {
        if self.col < self.lines[self.row].len() {
            self.lines[self.row].remove(self.col);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col = prev_char_boundary(&self.lines[self.row], self.col);
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].len();
        }
    }

    fn move_right(&mut self) {
        if self.col < self.lines[self.row].len() {
            self.col = next_char_boundary(&self.lines[self.row], self.col);
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.lines[self.row].len());
            self.col = floor_char_boundary(&self.lines[self.row], self.col);
        }
    }

    fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.lines[self.row].len());
            self.col = floor_char_boundary(&self.lines[self.row], self.col);
        }
    }

    /// Render the editor, drawing the cursor as an inverted cell when
    /// focused.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let mut rendered: Vec<Line> = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            if focused && i == self.row {
                let (before, rest) = line.split_at(self.col);
                let mut chars = rest.chars();
                let cursor_char = chars.next().map(String::from).unwrap_or_else(|| " ".into());
                let after: String = chars.collect();
                rendered.push(Line::from(vec![
                    Span::styled(before.to_string(), theme.editor_text),
                    Span::styled(cursor_char, theme.editor_cursor),
                    Span::styled(after, theme.editor_text),
                ]));
            } else {
                rendered.push(Line::styled(line.clone(), theme.editor_text));
            }
        }
        // Keep the cursor line in view when content is taller than the area
        let height = area.height as usize;
        let scroll = if height > 0 && self.row >= height {
            (self.row + 1 - height) as u16
        } else {
            0
        };
        frame.render_widget(Paragraph::new(rendered).scroll((scroll, 0)), area);
    }
}

impl Default for QueryEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx.min(s.len());
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_builds_content() {
        let mut editor = QueryEditor::new();
        for c in "SELECT 1".chars() {
            editor.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(editor.content(), "SELECT 1");
    }

    #[test]
    fn test_enter_splits_line() {
        let mut editor = QueryEditor::new();
        editor.set_content("SELECT 1");
        editor.handle_key(key(KeyCode::Enter));
        for c in "FROM t".chars() {
            editor.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(editor.content(), "SELECT 1\nFROM t");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = QueryEditor::new();
        editor.set_content("ab\ncd");
        editor.handle_key(key(KeyCode::Home));
        editor.handle_key(key(KeyCode::Backspace));
        assert_eq!(editor.content(), "abcd");
    }

    #[test]
    fn test_paste_with_newlines() {
        let mut editor = QueryEditor::new();
        editor.insert_text("SELECT *\r\nFROM users");
        assert_eq!(editor.content(), "SELECT *\nFROM users");
    }

    #[test]
    fn test_clear() {
        let mut editor = QueryEditor::new();
        editor.set_content("SELECT 1");
        assert!(!editor.is_empty());
        editor.clear();
        assert!(editor.is_empty());
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut editor = QueryEditor::new();
        editor.set_content("héllo");
        editor.handle_key(key(KeyCode::Left));
        editor.handle_key(key(KeyCode::Left));
        editor.handle_key(key(KeyCode::Backspace));
        assert_eq!(editor.content(), "hélo");
    }

    #[test]
    fn test_delete_at_line_end_joins() {
        let mut editor = QueryEditor::new();
        editor.set_content("ab\ncd");
        // Cursor at end of content; move to end of first line
        editor.handle_key(key(KeyCode::Up));
        editor.handle_key(key(KeyCode::End));
        editor.handle_key(key(KeyCode::Delete));
        assert_eq!(editor.content(), "abcd");
    }
}
