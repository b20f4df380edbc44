//! Keypad controller receive task
//!
//! The keypad co-processor reports key activity as two-byte events on its
//! own UART. Decoded events go to the input channel consumed by the
//! terminal loop.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use radioterm_core::event::InputEvent;

use crate::channels::INPUT_CHANNEL;

/// Keypad task - decodes two-byte reports into input events
#[embassy_executor::task]
pub async fn keypad_task(mut rx: BufferedUartRx<'static>) {
    info!("Keypad task started");

    let mut byte = [0u8; 1];
    let mut kind: Option<u8> = None;

    loop {
        match rx.read(&mut byte).await {
            Ok(0) => {}
            Ok(_) => match kind.take() {
                None => kind = Some(byte[0]),
                Some(k) => match InputEvent::from_wire(k, byte[0]) {
                    Some(event) => {
                        debug!("input event: {:?}", event);
                        // Send to input channel, dropping if full
                        if INPUT_CHANNEL.try_send(event).is_err() {
                            warn!("input channel full, dropping event");
                        }
                    }
                    None => {
                        warn!("unknown keypad report: {:02x} {:02x}", k, byte[0]);
                    }
                },
            },
            Err(e) => {
                warn!("keypad read error: {:?}", e);
            }
        }
    }
}
