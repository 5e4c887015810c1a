use unicode_width::UnicodeWidthChar;

/// Viewport over the wrapped output lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scroll {
    position: usize,
    content_length: usize,
    viewport_height: usize,
}

impl Scroll {
    pub fn position(&self) -> usize {
        return self.position;
    }

    fn max_position(&self) -> usize {
        return self.content_length.saturating_sub(self.viewport_height);
    }

    pub fn set_state(&mut self, content_length: usize, viewport_height: usize) {
        self.content_length = content_length;
        self.viewport_height = viewport_height;
        self.position = self.position.min(self.max_position());
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }

    pub fn is_position_at_last(&self) -> bool {
        return self.position == self.max_position();
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.viewport_height.max(1));
    }

    pub fn down_page(&mut self) {
        self.position = (self.position + self.viewport_height.max(1)).min(self.max_position());
    }
}

/// Output text hard-wrapped to a column width. Characters are appended to
/// the last line, so the cost of an append does not grow with history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLines {
    width: usize,
    lines: Vec<String>,
    last_line_width: usize,
}

impl Default for WrappedLines {
    fn default() -> WrappedLines {
        return WrappedLines::new(1);
    }
}

impl WrappedLines {
    pub fn new(width: usize) -> WrappedLines {
        return WrappedLines {
            width: width.max(1),
            lines: vec![String::new()],
            last_line_width: 0,
        };
    }

    pub fn width(&self) -> usize {
        return self.width;
    }

    pub fn lines(&self) -> &[String] {
        return &self.lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.len() == 1 && self.lines[0].is_empty();
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.last_line_width = 0;
    }

    /// Throws away the current lines and wraps `text` again at `width`.
    pub fn rewrap(&mut self, text: &str, width: usize) {
        self.width = width.max(1);
        self.clear();
        self.push_str(text);
    }

    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push_char(c);
        }
    }

    /// Appends one character, measured in terminal columns. A glyph that
    /// would cross the right edge starts a new line.
    pub fn push_char(&mut self, c: char) {
        if c == '\n' {
            self.start_line();
            return;
        }

        let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
        let overflows = self.last_line_width + char_width > self.width;
        if char_width > 0 && self.last_line_width > 0 && overflows {
            self.start_line();
        }

        if let Some(line) = self.lines.last_mut() {
            line.push(c);
        }
        self.last_line_width += char_width;
    }

    fn start_line(&mut self) {
        self.lines.push(String::new());
        self.last_line_width = 0;
    }
}

/// Hard-wraps text to `width` columns. A trailing line break yields a final
/// empty line, which is where the next typed character lands.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = WrappedLines::new(width);
    wrapped.push_str(text);

    return wrapped.lines;
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::*;

    #[test]
    fn it_clamps_to_content() {
        let mut scroll = Scroll::default();
        scroll.set_state(3, 10);
        scroll.down_page();
        assert_eq!(scroll.position(), 0);
        assert!(scroll.is_position_at_last());
    }

    #[test]
    fn it_moves_within_bounds() {
        let mut scroll = Scroll::default();
        scroll.set_state(30, 10);

        scroll.last();
        assert_eq!(scroll.position(), 20);

        scroll.down();
        assert_eq!(scroll.position(), 20);

        scroll.up_page();
        scroll.up();
        assert_eq!(scroll.position(), 9);
        assert!(!scroll.is_position_at_last());

        scroll.up_page();
        scroll.up_page();
        assert_eq!(scroll.position(), 0);
    }

    #[test]
    fn it_pulls_position_back_when_content_shrinks() {
        let mut scroll = Scroll::default();
        scroll.set_state(30, 10);
        scroll.last();

        scroll.set_state(1, 10);
        assert_eq!(scroll.position(), 0);
    }

    #[test]
    fn it_wraps_long_lines() {
        assert_eq!(
            wrap_lines("abcdef\n\nxy\n", 4),
            vec!["abcd", "ef", "", "xy", ""]
        );
    }

    #[test]
    fn it_wraps_empty_text_to_one_line() {
        assert_eq!(wrap_lines("", 10), vec![""]);
    }

    #[test]
    fn it_wraps_by_display_width() {
        let lines = wrap_lines("Portfolio loaded successfully ✅", 31);

        assert_eq!(lines, vec!["Portfolio loaded successfully ", "✅"]);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 31);
        }
    }

    #[test]
    fn it_keeps_wide_glyphs_inside_the_viewport() {
        let text = "山田太郎 — 東京";
        let lines = wrap_lines(text, 10);

        assert_eq!(lines, vec!["山田太郎 —", " 東京"]);
        assert_eq!(lines.concat(), text);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 10);
        }
    }

    #[test]
    fn it_lets_a_wide_glyph_overflow_a_single_column() {
        assert_eq!(wrap_lines("東京", 1), vec!["東", "京"]);
    }

    #[test]
    fn it_appends_to_the_last_line_only() {
        let history = "line of history\n".repeat(5_000);
        let mut wrapped = WrappedLines::new(8);
        wrapped.push_str(&history);
        let before = wrapped.lines()[..wrapped.len() - 1].to_vec();

        wrapped.push_char('a');
        wrapped.push_char('b');

        assert_eq!(&wrapped.lines()[..before.len()], before.as_slice());
        assert_eq!(wrapped.lines().last().unwrap(), "ab");
        assert_eq!(wrapped.lines(), wrap_lines(&format!("{history}ab"), 8).as_slice());
    }

    #[test]
    fn it_rewraps_at_a_new_width() {
        let mut wrapped = WrappedLines::new(4);
        wrapped.push_str("abcdef");
        assert_eq!(wrapped.lines(), ["abcd", "ef"]);

        wrapped.rewrap("abcdef", 3);
        assert_eq!(wrapped.width(), 3);
        assert_eq!(wrapped.lines(), ["abc", "def"]);

        wrapped.clear();
        assert!(wrapped.is_empty());
        assert_eq!(wrapped.lines(), [""]);
    }
}
