//! In-memory RGB565 frame

use core::convert::Infallible;

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

/// Panel width in pixels.
pub const FRAME_WIDTH: usize = 320;
/// Panel height in pixels.
pub const FRAME_HEIGHT: usize = 240;
/// Frame size in bytes: two bytes per pixel, big-endian RGB565.
pub const FRAME_BYTES: usize = FRAME_WIDTH * FRAME_HEIGHT * 2;

/// Full-frame pixel buffer backing the render gate.
///
/// Stores pixels directly in panel byte order so `present` can stream the
/// buffer to the glass without conversion.
pub struct FrameBuffer {
    pixels: &'static mut [u8; FRAME_BYTES],
}

impl FrameBuffer {
    pub fn new(pixels: &'static mut [u8; FRAME_BYTES]) -> Self {
        Self { pixels }
    }

    /// Frame contents as bytes in panel scan order.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= FRAME_WIDTH as i32
                || point.y >= FRAME_HEIGHT as i32
            {
                continue;
            }
            let index = (point.y as usize * FRAME_WIDTH + point.x as usize) * 2;
            let raw: u16 = color.into_storage();
            self.pixels[index] = (raw >> 8) as u8;
            self.pixels[index + 1] = raw as u8;
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(FRAME_WIDTH as u32, FRAME_HEIGHT as u32)
    }
}
