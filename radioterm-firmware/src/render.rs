//! Render gate
//!
//! Snapshots terminal state into the frame buffer and presents it to the
//! panel. The wallpaper view additionally lights the LED overlay.

use defmt::*;
use embedded_graphics::pixelcolor::Rgb565;
use tinybmp::Bmp;

use radioterm_core::led::LedFrame;
use radioterm_core::terminal::Terminal;
use radioterm_display::{draw_terminal, draw_wallpaper};
use radioterm_hal::led::LedStrip;
use radioterm_hal::panel::Panel;

use crate::display::{FrameBuffer, SpiPanel};
use crate::leds::StatusLeds;

/// Wallpaper asset, decoded on demand when the view is shown.
static WALLPAPER_BMP: &[u8] = include_bytes!("../assets/wallpaper.bmp");

pub struct RenderGate {
    frame: FrameBuffer,
    panel: SpiPanel,
    leds: StatusLeds,
}

impl RenderGate {
    pub fn new(frame: FrameBuffer, panel: SpiPanel, leds: StatusLeds) -> Self {
        Self { frame, panel, leds }
    }

    /// Draw the normal terminal view.
    pub fn render(&mut self, terminal: &Terminal) {
        // Drawing into the frame buffer cannot fail; only the panel
        // transfer can.
        let _ = draw_terminal(&mut self.frame, terminal.scrollback(), terminal.input());
        if let Err(e) = self.panel.present(self.frame.as_bytes()) {
            error!("panel write failed: {:?}", e);
        }
    }

    /// Draw the wallpaper view and light the LED overlay.
    pub async fn render_wallpaper(&mut self) {
        match Bmp::<Rgb565>::from_slice(WALLPAPER_BMP) {
            Ok(bmp) => {
                let _ = draw_wallpaper(&mut self.frame, &bmp);
                if let Err(e) = self.panel.present(self.frame.as_bytes()) {
                    error!("panel write failed: {:?}", e);
                }
            }
            Err(_) => warn!("wallpaper asset unreadable"),
        }

        let overlay = LedFrame::rainbow();
        let _ = self.leds.write(overlay.as_bytes()).await;
    }
}
