//! Radio link over the buffered UART
//!
//! The RX pump task drains the UART into a fixed byte pipe so the event
//! loop can check for buffered data without blocking, then read it with a
//! bounded wait. TX goes straight to the UART.

use embassy_rp::uart::BufferedUartTx;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Write;

use radioterm_core::config::{TRANSPORT_BUFFER, TRANSPORT_READ_TIMEOUT_MS};
use radioterm_hal::serial::RadioLink;

/// Received radio bytes, buffered between the pump task and the event loop.
pub static RADIO_RX: Pipe<CriticalSectionRawMutex, TRANSPORT_BUFFER> = Pipe::new();

/// `RadioLink` implementation fronting the RX pipe and the UART TX half.
pub struct Radio {
    tx: BufferedUartTx<'static>,
}

impl Radio {
    pub fn new(tx: BufferedUartTx<'static>) -> Self {
        Self { tx }
    }
}

impl RadioLink for Radio {
    type Error = embassy_rp::uart::Error;

    fn available(&self) -> usize {
        RADIO_RX.len()
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match with_timeout(
            Duration::from_millis(TRANSPORT_READ_TIMEOUT_MS),
            RADIO_RX.read(buf),
        )
        .await
        {
            Ok(n) => Ok(n),
            // Nothing arrived within the bound; the loop just tries again.
            Err(_) => Ok(0),
        }
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        Write::write_all(&mut self.tx, data).await
    }
}
