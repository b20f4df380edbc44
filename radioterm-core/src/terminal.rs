//! Terminal state and input routing
//!
//! Owns the scrollback and the line editor. The event loop feeds received
//! radio text and input events through these methods and performs the
//! returned side effect; all mutation happens on the loop's single thread
//! of control, so no locking is involved.

use heapless::String;

use crate::config::{LINE_CHARS, SCROLLBACK_LINES};
use crate::editor::LineEditor;
use crate::event::{InputEvent, NavKey};
use crate::scrollback::Scrollback;

/// ASCII backspace, as delivered by the keypad controller.
const BACKSPACE: u8 = 0x08;

/// Side effect the event loop must perform after routing an input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing changed; skip the redraw.
    None,
    /// Redraw the normal terminal view.
    Render,
    /// Send the submitted line (plus CRLF) over the radio, then redraw.
    Submit(String<LINE_CHARS>),
    /// Show the wallpaper view instead of the normal redraw.
    Wallpaper,
}

/// The terminal's owned state: scrollback plus input line.
#[derive(Debug, Default)]
pub struct Terminal {
    scrollback: Scrollback<SCROLLBACK_LINES, LINE_CHARS>,
    editor: LineEditor<LINE_CHARS>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            scrollback: Scrollback::new(),
            editor: LineEditor::new(),
        }
    }

    /// Record a chunk of text received from the radio.
    pub fn receive(&mut self, text: &str) -> Action {
        self.scrollback.append(text);
        Action::Render
    }

    /// Route one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Keyboard { ascii } => self.handle_key(ascii),
            InputEvent::Navigation { key, pressed: true } => self.handle_nav(key),
            InputEvent::Navigation { pressed: false, .. } => Action::None,
        }
    }

    fn handle_key(&mut self, ascii: u8) -> Action {
        match ascii {
            BACKSPACE => self.editor.backspace(),
            // Entry terminates via NavKey::Return, never via a character.
            b'\r' | b'\n' => {}
            _ => self.editor.push(ascii as char),
        }
        Action::Render
    }

    fn handle_nav(&mut self, key: NavKey) -> Action {
        match key {
            NavKey::Return => {
                let line = self.editor.submit();
                self.scrollback.append(&line);
                Action::Submit(line)
            }
            NavKey::F1 => Action::Wallpaper,
            _ => Action::Render,
        }
    }

    pub fn scrollback(&self) -> &Scrollback<SCROLLBACK_LINES, LINE_CHARS> {
        &self.scrollback
    }

    /// Current contents of the input line.
    pub fn input(&self) -> &str {
        self.editor.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ascii: u8) -> InputEvent {
        InputEvent::Keyboard { ascii }
    }

    fn nav(key: NavKey, pressed: bool) -> InputEvent {
        InputEvent::Navigation { key, pressed }
    }

    #[test]
    fn test_keyboard_char_edits_without_touching_scrollback() {
        let mut terminal = Terminal::new();
        let action = terminal.handle_event(key(b'x'));

        assert_eq!(action, Action::Render);
        assert_eq!(terminal.input(), "x");
        assert!(terminal.scrollback().snapshot().all(str::is_empty));
    }

    #[test]
    fn test_backspace_key_removes_last_char() {
        let mut terminal = Terminal::new();
        terminal.handle_event(key(b'h'));
        terminal.handle_event(key(b'i'));
        let action = terminal.handle_event(key(0x08));

        assert_eq!(action, Action::Render);
        assert_eq!(terminal.input(), "h");
    }

    #[test]
    fn test_line_terminator_keys_are_ignored() {
        let mut terminal = Terminal::new();
        terminal.handle_event(key(b'\r'));
        let action = terminal.handle_event(key(b'\n'));

        assert_eq!(action, Action::Render);
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn test_return_submits_line_and_clears_editor() {
        let mut terminal = Terminal::new();
        for ch in b"ping" {
            terminal.handle_event(key(*ch));
        }

        let action = terminal.handle_event(nav(NavKey::Return, true));
        match action {
            Action::Submit(line) => assert_eq!(line.as_str(), "ping"),
            other => panic!("expected submit, got {:?}", other),
        }
        assert_eq!(terminal.scrollback().newest(), "ping");
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn test_received_text_lands_in_scrollback() {
        let mut terminal = Terminal::new();
        let action = terminal.receive("hello");

        assert_eq!(action, Action::Render);
        assert_eq!(terminal.scrollback().newest(), "hello");
    }

    #[test]
    fn test_f1_press_requests_wallpaper() {
        let mut terminal = Terminal::new();
        assert_eq!(
            terminal.handle_event(nav(NavKey::F1, true)),
            Action::Wallpaper
        );
    }

    #[test]
    fn test_wallpaper_is_one_shot() {
        let mut terminal = Terminal::new();
        terminal.handle_event(nav(NavKey::F1, true));
        // The next event routes back to the normal view.
        assert_eq!(terminal.handle_event(key(b'a')), Action::Render);
    }

    #[test]
    fn test_nav_release_does_nothing() {
        let mut terminal = Terminal::new();
        assert_eq!(
            terminal.handle_event(nav(NavKey::Return, false)),
            Action::None
        );
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn test_other_nav_press_just_renders() {
        let mut terminal = Terminal::new();
        assert_eq!(terminal.handle_event(nav(NavKey::Up, true)), Action::Render);
        assert!(terminal.scrollback().snapshot().all(str::is_empty));
    }
}
