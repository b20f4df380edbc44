//! Terminal event loop
//!
//! The single thread of control for all terminal state. Each iteration
//! drains the radio first, then waits briefly for one input event; the two
//! bounded waits never run concurrently, so radio traffic always has
//! priority over the keypad.

use defmt::*;
use embassy_time::{with_timeout, Duration};

use radioterm_core::config::{EVENT_WAIT_MS, TRANSPORT_BUFFER};
use radioterm_core::terminal::{Action, Terminal};
use radioterm_hal::serial::RadioLink;

use crate::channels::INPUT_CHANNEL;
use crate::radio::Radio;
use crate::render::RenderGate;

/// Terminal task - the event multiplexer
#[embassy_executor::task]
pub async fn terminal_task(mut radio: Radio, mut gate: RenderGate) {
    info!("Terminal task started");

    let mut terminal = Terminal::new();

    // Boot with a full screen of blank scrollback.
    gate.render(&terminal);

    // One byte short of the transport buffer, so a full read still converts
    // to a bounded string.
    let mut rx_buf = [0u8; TRANSPORT_BUFFER - 1];

    loop {
        if radio.available() > 0 {
            match radio.read(&mut rx_buf).await {
                Ok(n) if n > 0 => {
                    let text = match core::str::from_utf8(&rx_buf[..n]) {
                        Ok(text) => text,
                        // Keep the valid prefix; a split multi-byte sequence
                        // at the chunk boundary is not worth stalling over.
                        Err(e) => {
                            core::str::from_utf8(&rx_buf[..e.valid_up_to()]).unwrap_or("")
                        }
                    };
                    terminal.receive(text);
                    gate.render(&terminal);
                }
                Ok(_) => {
                    // Wait expired with nothing readable; check again
                }
                Err(e) => {
                    // Log and skip rendering this tick
                    error!("radio read error: {:?}", e);
                }
            }
            continue;
        }

        match with_timeout(Duration::from_millis(EVENT_WAIT_MS), INPUT_CHANNEL.receive()).await {
            Ok(event) => match terminal.handle_event(event) {
                Action::None => {}
                Action::Render => gate.render(&terminal),
                Action::Submit(line) => {
                    if let Err(e) = radio.write_all(line.as_bytes()).await {
                        error!("radio write error: {:?}", e);
                    }
                    if let Err(e) = radio.write_all(b"\r\n").await {
                        error!("radio write error: {:?}", e);
                    }
                    gate.render(&terminal);
                }
                Action::Wallpaper => gate.render_wallpaper().await,
            },
            Err(_) => {
                // Idle tick, nothing to do
            }
        }
    }
}
