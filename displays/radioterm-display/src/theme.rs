//! Terminal colors and layout metrics

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Scrollback background (pale green, 0x64E38F).
pub const BACKGROUND: Rgb565 = Rgb565::new(0x64 >> 3, 0xE3 >> 2, 0x8F >> 3);

/// Scrollback text (dark slate, 0x2B2C3A).
pub const TEXT: Rgb565 = Rgb565::new(0x2B >> 3, 0x2C >> 2, 0x3A >> 3);

/// Input strip background, contrasting with the scrollback area.
pub const INPUT_BACKGROUND: Rgb565 = Rgb565::WHITE;

/// Input strip text.
pub const INPUT_TEXT: Rgb565 = Rgb565::BLACK;

/// Backdrop behind the wallpaper image.
pub const WALLPAPER_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Font for all terminal text.
pub const FONT: &MonoFont<'static> = &FONT_6X10;

/// Row pitch of the scrollback text, in pixels.
pub const ROW_HEIGHT: u32 = 10;

/// Height of the reserved input strip at the bottom of the panel.
pub const INPUT_STRIP_HEIGHT: u32 = 14;

/// Horizontal inset of the input text inside the strip.
pub const INPUT_TEXT_INSET: i32 = 2;
