//! SPI panel transfer
//!
//! Whole-frame writes to an ST7789-class panel over blocking SPI. The
//! one-time initialization sequence runs during bring-up; after that the
//! panel only ever sees full-frame memory writes.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Error as SpiError, Spi};

use radioterm_hal::panel::Panel;

use super::{FRAME_HEIGHT, FRAME_WIDTH};

// MIPI DCS command subset
const CMD_SLEEP_OUT: u8 = 0x11;
const CMD_DISPLAY_ON: u8 = 0x29;
const CMD_COLUMN_ADDR: u8 = 0x2A;
const CMD_ROW_ADDR: u8 = 0x2B;
const CMD_MEMORY_WRITE: u8 = 0x2C;
const CMD_PIXEL_FORMAT: u8 = 0x3A;

// 16 bits per pixel
const PIXEL_FORMAT_565: u8 = 0x55;

pub struct SpiPanel {
    spi: Spi<'static, SPI1, Blocking>,
    dc: Output<'static>,
    cs: Output<'static>,
}

impl SpiPanel {
    pub fn new(spi: Spi<'static, SPI1, Blocking>, dc: Output<'static>, cs: Output<'static>) -> Self {
        Self { spi, dc, cs }
    }

    /// One-time panel bring-up: wake, 16-bit pixels, full-screen window.
    pub fn init(&mut self) -> Result<(), SpiError> {
        self.command(CMD_SLEEP_OUT, &[])?;
        self.command(CMD_PIXEL_FORMAT, &[PIXEL_FORMAT_565])?;
        self.set_full_window()?;
        self.command(CMD_DISPLAY_ON, &[])
    }

    fn set_full_window(&mut self) -> Result<(), SpiError> {
        let right = (FRAME_WIDTH as u16 - 1).to_be_bytes();
        let bottom = (FRAME_HEIGHT as u16 - 1).to_be_bytes();
        self.command(CMD_COLUMN_ADDR, &[0, 0, right[0], right[1]])?;
        self.command(CMD_ROW_ADDR, &[0, 0, bottom[0], bottom[1]])
    }

    fn command(&mut self, command: u8, data: &[u8]) -> Result<(), SpiError> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.blocking_write(&[command]);
        self.dc.set_high();
        if result.is_ok() && !data.is_empty() {
            result = self.spi.blocking_write(data);
        }
        self.cs.set_high();
        result
    }
}

impl Panel for SpiPanel {
    type Error = SpiError;

    fn present(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.command(CMD_MEMORY_WRITE, frame)
    }
}
