//! Status LED overlay
//!
//! Six WS2812-class LEDs addressed as a flat byte buffer, three bytes per
//! LED in GRB wire order. The strip is always written wholesale.

use crate::config::LED_COUNT;

/// Wallpaper overlay colors, one `0xRRGGBB` value per LED.
pub const WALLPAPER_PALETTE: [u32; LED_COUNT] = [
    0xFC0303, 0xFC6F03, 0xF4FC03, 0xFC03E3, 0x0303FC, 0x03FC03,
];

/// One frame of LED data in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedFrame {
    data: [u8; LED_COUNT * 3],
}

impl LedFrame {
    /// All LEDs off.
    pub const fn new() -> Self {
        Self {
            data: [0; LED_COUNT * 3],
        }
    }

    /// Set one LED from a `0xRRGGBB` color. Out-of-range indices are
    /// ignored.
    pub fn set_color(&mut self, led: usize, color: u32) {
        if led >= LED_COUNT {
            return;
        }
        self.data[led * 3] = (color >> 8) as u8; // G
        self.data[led * 3 + 1] = (color >> 16) as u8; // R
        self.data[led * 3 + 2] = color as u8; // B
    }

    /// The fixed rainbow overlay shown with the wallpaper view.
    pub fn rainbow() -> Self {
        let mut frame = Self::new();
        for (led, &color) in WALLPAPER_PALETTE.iter().enumerate() {
            frame.set_color(led, color);
        }
        frame
    }

    /// Raw GRB bytes in transmission order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stored_in_grb_order() {
        let mut frame = LedFrame::new();
        frame.set_color(0, 0xFC6F03);
        assert_eq!(&frame.as_bytes()[..3], &[0x6F, 0xFC, 0x03]);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut frame = LedFrame::new();
        frame.set_color(LED_COUNT, 0xFFFFFF);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rainbow_matches_palette() {
        let frame = LedFrame::rainbow();
        for (led, &color) in WALLPAPER_PALETTE.iter().enumerate() {
            let triple = &frame.as_bytes()[led * 3..led * 3 + 3];
            assert_eq!(
                triple,
                &[
                    (color >> 8) as u8,
                    (color >> 16) as u8,
                    color as u8,
                ]
            );
        }
    }

    #[test]
    fn test_frame_is_one_triple_per_led() {
        assert_eq!(LedFrame::new().as_bytes().len(), LED_COUNT * 3);
    }
}
