//! Status LED strip over PIO
//!
//! Adapts the flat GRB frame from the core to the PIO WS2812 driver, which
//! takes per-LED RGB values and handles the wire encoding itself.

use core::convert::Infallible;

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use radioterm_core::config::LED_COUNT;
use radioterm_core::led::LedFrame;
use radioterm_hal::led::LedStrip;

pub struct StatusLeds {
    driver: PioWs2812<'static, PIO0, 0, LED_COUNT>,
}

impl StatusLeds {
    pub fn new(driver: PioWs2812<'static, PIO0, 0, LED_COUNT>) -> Self {
        Self { driver }
    }

    /// Switch every LED off.
    pub async fn clear(&mut self) {
        let off = LedFrame::new();
        let _ = LedStrip::write(self, off.as_bytes()).await;
    }
}

impl LedStrip for StatusLeds {
    type Error = Infallible;

    async fn write(&mut self, grb: &[u8]) -> Result<(), Self::Error> {
        let mut colors = [RGB8::default(); LED_COUNT];
        for (led, color) in colors.iter_mut().enumerate() {
            let base = led * 3;
            if base + 2 < grb.len() {
                // Wire order is GRB; the driver wants RGB components.
                *color = RGB8::new(grb[base + 1], grb[base], grb[base + 2]);
            }
        }
        self.driver.write(&colors).await;
        Ok(())
    }
}
