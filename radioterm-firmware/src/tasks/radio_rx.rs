//! Radio UART receive pump
//!
//! Drains the radio UART into the RX pipe consumed by the terminal loop.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::radio::RADIO_RX;

/// Chunk size for a single UART read
const RX_CHUNK: usize = 64;

/// Radio RX task - moves received bytes into the RX pipe
#[embassy_executor::task]
pub async fn radio_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Radio RX task started");

    let mut buf = [0u8; RX_CHUNK];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("radio RX: {} bytes", n);
                let mut rest = &buf[..n];
                while !rest.is_empty() {
                    let written = RADIO_RX.write(rest).await;
                    rest = &rest[written..];
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                // Hard transport error: log it and carry on as if nothing
                // arrived.
                error!("radio read error: {:?}", e);
            }
        }
    }
}
