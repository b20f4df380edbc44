//! Input events from the keypad controller
//!
//! The keypad co-processor reports key activity as two-byte events on its
//! UART: a kind byte followed by an argument byte. Keyboard events carry the
//! ASCII character; navigation events carry a key code and arrive as
//! separate press and release reports.

/// Navigation keys, distinct from printable keyboard characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavKey {
    /// Confirm / end-of-line
    Return,
    /// Wallpaper view
    F1,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// A single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// A character from the keyboard matrix (printable or control)
    Keyboard { ascii: u8 },
    /// A navigation key transition
    Navigation { key: NavKey, pressed: bool },
}

// Wire format kind bytes
const KIND_KEYBOARD: u8 = 0x01;
const KIND_NAV_PRESS: u8 = 0x02;
const KIND_NAV_RELEASE: u8 = 0x03;

// Wire format navigation key codes
const KEY_RETURN: u8 = 0x10;
const KEY_F1: u8 = 0x11;
const KEY_UP: u8 = 0x20;
const KEY_DOWN: u8 = 0x21;
const KEY_LEFT: u8 = 0x22;
const KEY_RIGHT: u8 = 0x23;
const KEY_ESCAPE: u8 = 0x30;

impl NavKey {
    /// Parse a key from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_RETURN => Some(NavKey::Return),
            KEY_F1 => Some(NavKey::F1),
            KEY_UP => Some(NavKey::Up),
            KEY_DOWN => Some(NavKey::Down),
            KEY_LEFT => Some(NavKey::Left),
            KEY_RIGHT => Some(NavKey::Right),
            KEY_ESCAPE => Some(NavKey::Escape),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            NavKey::Return => KEY_RETURN,
            NavKey::F1 => KEY_F1,
            NavKey::Up => KEY_UP,
            NavKey::Down => KEY_DOWN,
            NavKey::Left => KEY_LEFT,
            NavKey::Right => KEY_RIGHT,
            NavKey::Escape => KEY_ESCAPE,
        }
    }
}

impl InputEvent {
    /// Decode a two-byte report. Unknown kinds and key codes are dropped.
    pub fn from_wire(kind: u8, arg: u8) -> Option<Self> {
        match kind {
            KIND_KEYBOARD => Some(InputEvent::Keyboard { ascii: arg }),
            KIND_NAV_PRESS => NavKey::from_byte(arg).map(|key| InputEvent::Navigation {
                key,
                pressed: true,
            }),
            KIND_NAV_RELEASE => NavKey::from_byte(arg).map(|key| InputEvent::Navigation {
                key,
                pressed: false,
            }),
            _ => None,
        }
    }

    /// Encode to the two-byte report format
    pub fn to_wire(self) -> [u8; 2] {
        match self {
            InputEvent::Keyboard { ascii } => [KIND_KEYBOARD, ascii],
            InputEvent::Navigation { key, pressed: true } => [KIND_NAV_PRESS, key.to_byte()],
            InputEvent::Navigation {
                key,
                pressed: false,
            } => [KIND_NAV_RELEASE, key.to_byte()],
        }
    }

    /// Returns true for a key-down navigation transition
    pub fn is_nav_press(&self) -> bool {
        matches!(
            self,
            InputEvent::Navigation { pressed: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_roundtrip() {
        let events = [
            InputEvent::Keyboard { ascii: b'x' },
            InputEvent::Navigation {
                key: NavKey::Return,
                pressed: true,
            },
            InputEvent::Navigation {
                key: NavKey::F1,
                pressed: false,
            },
            InputEvent::Navigation {
                key: NavKey::Escape,
                pressed: true,
            },
        ];

        for event in events {
            let [kind, arg] = event.to_wire();
            let parsed = InputEvent::from_wire(kind, arg).unwrap();
            assert_eq!(event, parsed);
        }
    }

    #[test]
    fn test_unknown_kind_is_dropped() {
        assert!(InputEvent::from_wire(0x00, b'a').is_none());
        assert!(InputEvent::from_wire(0xFF, 0x10).is_none());
    }

    #[test]
    fn test_unknown_nav_key_is_dropped() {
        assert!(InputEvent::from_wire(0x02, 0xEE).is_none());
        assert!(NavKey::from_byte(0x00).is_none());
    }

    #[test]
    fn test_is_nav_press() {
        let press = InputEvent::Navigation {
            key: NavKey::Return,
            pressed: true,
        };
        let release = InputEvent::Navigation {
            key: NavKey::Return,
            pressed: false,
        };
        assert!(press.is_nav_press());
        assert!(!release.is_nav_press());
        assert!(!InputEvent::Keyboard { ascii: b'a' }.is_nav_press());
    }
}
