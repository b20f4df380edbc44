//! Single-line input editor
//!
//! One bounded line of text, edited in place. Line terminators never enter
//! the buffer; entry is finished by a separate submit signal from the input
//! loop.

use heapless::String;

/// Bounded single-line editor with `C` characters of capacity.
#[derive(Debug, Default)]
pub struct LineEditor<const C: usize> {
    text: String<C>,
}

impl<const C: usize> LineEditor<C> {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append one character. Dropped silently when the buffer is full;
    /// `\r` and `\n` are ignored outright.
    pub fn push(&mut self, ch: char) {
        if ch == '\r' || ch == '\n' {
            return;
        }
        let _ = self.text.push(ch);
    }

    /// Remove the last character; no-op when empty.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the current line, leaving the editor empty.
    pub fn submit(&mut self) -> String<C> {
        let line = self.text.clone();
        self.text.clear();
        line
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_backspace_submit() {
        let mut editor: LineEditor<59> = LineEditor::new();
        editor.push('h');
        editor.push('i');
        assert_eq!(editor.as_str(), "hi");

        editor.backspace();
        assert_eq!(editor.as_str(), "h");

        let line = editor.submit();
        assert_eq!(line.as_str(), "h");
        assert!(editor.is_empty());
    }

    #[test]
    fn test_push_beyond_capacity_is_dropped() {
        let mut editor: LineEditor<3> = LineEditor::new();
        for ch in ['a', 'b', 'c', 'd', 'e'] {
            editor.push(ch);
        }
        assert_eq!(editor.as_str(), "abc");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut editor: LineEditor<3> = LineEditor::new();
        editor.backspace();
        assert!(editor.is_empty());
    }

    #[test]
    fn test_line_terminators_never_enter_the_buffer() {
        let mut editor: LineEditor<8> = LineEditor::new();
        editor.push('a');
        editor.push('\r');
        editor.push('\n');
        editor.push('b');
        assert_eq!(editor.as_str(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut editor: LineEditor<8> = LineEditor::new();
        editor.push('x');
        editor.clear();
        assert!(editor.is_empty());
    }
}
