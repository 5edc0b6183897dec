//! Text input widget
//!
//! A single-line text field with cursor support. The cursor counts
//! characters, not bytes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::tui::palette::Palette;

/// Character used to mask secret input
const MASK_CHAR: char = '•';

/// Editable text state
///
/// The buffer is zeroized when cleared or dropped, since it may hold a
/// password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position, in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len_chars() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Wipe the content and reset the cursor
    pub fn clear(&mut self) {
        self.zeroize();
    }
}

/// Renders a [`TextInput`] as `label: value`
pub struct TextField<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    masked: bool,
    invalid: bool,
    palette: Palette,
}

impl<'a> TextField<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, palette: Palette) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            focused: false,
            masked: false,
            invalid: false,
            palette,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show every character as a bullet
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Highlight the label as failing validation
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let label_width = (self.label.chars().count() + 2) as u16;

        let label_style = if self.invalid {
            Style::default().fg(p.error)
        } else if self.focused {
            p.focus()
        } else {
            Style::default().fg(p.label)
        };
        let label_line = Line::from(vec![
            Span::styled(self.label, label_style),
            Span::styled(": ", Style::default().fg(p.muted)),
        ]);
        buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));

        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width);
        if input_width == 0 {
            return;
        }

        let shown: String = if self.masked {
            self.input.value().chars().map(|_| MASK_CHAR).collect()
        } else {
            self.input.value().to_string()
        };

        if shown.is_empty() && !self.focused {
            buf.set_stringn(
                input_start,
                area.y,
                self.placeholder,
                input_width as usize,
                Style::default().fg(p.muted),
            );
            return;
        }

        buf.set_stringn(
            input_start,
            area.y,
            &shown,
            input_width as usize,
            Style::default().fg(p.text),
        );

        if self.focused {
            let cursor = self.input.cursor();
            if (cursor as u16) < input_width {
                let cursor_char = shown.chars().nth(cursor).unwrap_or(' ');
                buf.set_string(
                    input_start + cursor as u16,
                    area.y,
                    cursor_char.to_string(),
                    p.cursor(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        s.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_clear_wipes_buffer() {
        let mut input = typed("hunter22");
        input.move_left();
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(input, TextInput::default());

        // Still usable after a wipe
        input.insert('x');
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("abc");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);

        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        input.move_start();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "hllo");

        input.insert('ë');
        assert_eq!(input.value(), "hëllo");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "hëll");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut input = typed("secret");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_masked_render_hides_content() {
        let input = typed("hunter22");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TextField::new(&input, "Password", Palette::dark())
            .masked(true)
            .render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(rendered.starts_with("Password: "));
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("••••••••"));
    }
}
