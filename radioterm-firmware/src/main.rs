//! Radioterm - handheld serial terminal firmware
//!
//! Shows a scrolling log of text received from the radio co-processor,
//! relays typed lines back over the radio UART, and drives the status LED
//! strip for the wallpaper view.
//!
//! All terminal state lives in one event-loop task; the other tasks only
//! pump bytes and events into bounded queues.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIO0, UART0, UART1};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use radioterm_core::config::{LED_COUNT, TRANSPORT_BAUD, TRANSPORT_BUFFER};

use crate::display::{FrameBuffer, SpiPanel, FRAME_BYTES};
use crate::leds::StatusLeds;
use crate::radio::Radio;
use crate::render::RenderGate;

mod channels;
mod display;
mod leds;
mod radio;
mod render;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static RADIO_TX_BUF: StaticCell<[u8; TRANSPORT_BUFFER]> = StaticCell::new();
static RADIO_RX_BUF: StaticCell<[u8; TRANSPORT_BUFFER]> = StaticCell::new();
static KEYPAD_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static KEYPAD_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Full-frame pixel buffer for the render gate
static FRAME_BUF: StaticCell<[u8; FRAME_BYTES]> = StaticCell::new();

// PIO program for the LED strip (referenced by the driver for its lifetime)
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Radioterm firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Radio co-processor power sequencing: hold in reset, then release into
    // application mode.
    let mut radio_reset = Output::new(p.PIN_15, Level::Low);
    warn!("Holding radio in reset...");
    Timer::after_millis(100).await;
    warn!("Releasing radio into application mode...");
    radio_reset.set_high();
    Timer::after_millis(100).await;

    // Radio link on UART1
    let mut radio_config = UartConfig::default();
    radio_config.baudrate = TRANSPORT_BAUD;
    let radio_uart = Uart::new_blocking(p.UART1, p.PIN_8, p.PIN_9, radio_config);
    let radio_uart = radio_uart.into_buffered(
        Irqs,
        RADIO_TX_BUF.init([0; TRANSPORT_BUFFER]),
        RADIO_RX_BUF.init([0; TRANSPORT_BUFFER]),
    );
    let (radio_tx, radio_rx) = radio_uart.split();
    info!("Radio UART initialized at {} baud", TRANSPORT_BAUD);

    // Keypad controller on UART0 (115200 baud default)
    let keypad_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let keypad_uart = keypad_uart.into_buffered(
        Irqs,
        KEYPAD_TX_BUF.init([0; 16]),
        KEYPAD_RX_BUF.init([0; 64]),
    );
    let (_keypad_tx, keypad_rx) = keypad_uart.split();
    info!("Keypad UART initialized");

    // Display panel on SPI1
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 62_500_000;
    let panel_spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let panel_dc = Output::new(p.PIN_12, Level::Low);
    let panel_cs = Output::new(p.PIN_13, Level::High);
    let _backlight = Output::new(p.PIN_14, Level::High);

    let mut panel = SpiPanel::new(panel_spi, panel_dc, panel_cs);
    // Bring-up failures are fatal before the loop starts.
    panel.init().unwrap();
    info!("Display panel initialized");

    let frame = FrameBuffer::new(FRAME_BUF.init([0; FRAME_BYTES]));

    // Status LED strip on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let ws2812_program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let ws2812: PioWs2812<'static, PIO0, 0, LED_COUNT> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_25, ws2812_program);
    let mut leds = StatusLeds::new(ws2812);
    // All LEDs off until the wallpaper view asks for the overlay.
    leds.clear().await;
    info!("LED strip initialized");

    let gate = RenderGate::new(frame, panel, leds);
    let radio = Radio::new(radio_tx);

    // Spawn tasks
    spawner.spawn(tasks::radio_rx_task(radio_rx)).unwrap();
    spawner.spawn(tasks::keypad_task(keypad_rx)).unwrap();
    spawner.spawn(tasks::terminal_task(radio, gate)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
