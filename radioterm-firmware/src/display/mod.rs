//! Frame buffer and SPI panel driver
//!
//! The render gate draws into a full RGB565 frame in RAM; `present` pushes
//! the frame to the panel wholesale. There are no partial updates.

mod framebuffer;
mod panel;

pub use framebuffer::{FrameBuffer, FRAME_BYTES, FRAME_HEIGHT, FRAME_WIDTH};
pub use panel::SpiPanel;
