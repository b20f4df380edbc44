//! Bounded scrollback of received text lines
//!
//! A fixed number of line slots with a rotating write cursor. Every slot is
//! valid from startup, so a freshly booted terminal shows a full screen of
//! blank lines rather than a shorter history.

use heapless::String;

/// Fixed-capacity scrollback ring.
///
/// `L` is the number of lines kept, `C` the character capacity per line.
/// Once the ring has wrapped, each append overwrites the oldest line.
#[derive(Debug)]
pub struct Scrollback<const L: usize, const C: usize> {
    storage: [String<C>; L],
    /// Oldest line, and the slot the next append overwrites. Always `< L`.
    head: usize,
}

impl<const L: usize, const C: usize> Scrollback<L, C> {
    pub fn new() -> Self {
        Self {
            storage: core::array::from_fn(|_| String::new()),
            head: 0,
        }
    }

    /// Store `text` as the newest line, evicting the oldest.
    ///
    /// Carriage returns and line feeds are replaced by single spaces so each
    /// stored line stays a single visual row. Text beyond the line capacity
    /// is dropped silently. Always succeeds.
    pub fn append(&mut self, text: &str) {
        let slot = &mut self.storage[self.head];
        slot.clear();
        for ch in text.chars() {
            let ch = if ch == '\r' || ch == '\n' { ' ' } else { ch };
            if slot.push(ch).is_err() {
                break;
            }
        }
        self.head = (self.head + 1) % L;
    }

    /// Iterate all `L` lines, oldest to newest. Always yields exactly `L`
    /// entries.
    pub fn snapshot(&self) -> impl Iterator<Item = &str> {
        (0..L).map(move |i| self.storage[(self.head + i) % L].as_str())
    }

    /// The most recently appended line.
    pub fn newest(&self) -> &str {
        self.storage[(self.head + L - 1) % L].as_str()
    }
}

impl<const L: usize, const C: usize> Default for Scrollback<L, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::string::String as StdString;
    use std::vec::Vec;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_starts_with_full_screen_of_blank_lines() {
        let ring: Scrollback<17, 59> = Scrollback::new();
        let lines: Vec<&str> = ring.snapshot().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines.iter().all(|line| line.is_empty()));
    }

    #[test]
    fn test_appends_in_order() {
        let mut ring: Scrollback<3, 5> = Scrollback::new();
        ring.append("ab");
        ring.append("cd");
        ring.append("ef");
        let lines: Vec<&str> = ring.snapshot().collect();
        assert_eq!(lines, ["ab", "cd", "ef"]);
    }

    #[test]
    fn test_evicts_oldest_after_wrap() {
        let mut ring: Scrollback<3, 5> = Scrollback::new();
        ring.append("ab");
        ring.append("cd");
        ring.append("ef");
        ring.append("gh");
        let lines: Vec<&str> = ring.snapshot().collect();
        assert_eq!(lines, ["cd", "ef", "gh"]);
    }

    #[test]
    fn test_first_line_gone_after_capacity_plus_one_appends() {
        let mut ring: Scrollback<3, 5> = Scrollback::new();
        for line in ["one", "two", "three", "four"] {
            ring.append(line);
        }
        assert!(ring.snapshot().all(|line| line != "one"));
        assert_eq!(ring.newest(), "four");
    }

    #[test]
    fn test_normalizes_line_breaks_to_spaces() {
        let mut ring: Scrollback<3, 20> = Scrollback::new();
        ring.append("hi\r\nthere");
        assert_eq!(ring.newest(), "hi  there");
    }

    #[test]
    fn test_truncates_overlong_text() {
        let mut ring: Scrollback<3, 5> = Scrollback::new();
        ring.append("abcdefgh");
        assert_eq!(ring.newest(), "abcde");
    }

    proptest! {
        #[test]
        fn prop_snapshot_stays_full_and_tracks_recent_appends(
            lines in proptest::collection::vec("[a-z]{0,8}", 0..40)
        ) {
            let mut ring: Scrollback<5, 10> = Scrollback::new();
            for line in &lines {
                ring.append(line);
            }

            let snap: Vec<StdString> = ring.snapshot().map(StdString::from).collect();
            prop_assert_eq!(snap.len(), 5);

            // The newest entries must match the tail of the appended sequence.
            let recent = lines.len().min(5);
            for i in 0..recent {
                prop_assert_eq!(&snap[4 - i], &lines[lines.len() - 1 - i]);
            }
        }
    }
}
