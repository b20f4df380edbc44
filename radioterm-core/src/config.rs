//! Compile-time configuration
//!
//! All sizing and timing is fixed at build time. There is no runtime
//! configuration surface: no CLI flags, no config file.

/// Number of scrollback lines kept and drawn. The screen always shows this
/// many rows, blank lines included.
pub const SCROLLBACK_LINES: usize = 17;

/// Maximum characters per scrollback line and per input line.
pub const LINE_CHARS: usize = 59;

/// Radio link baud rate.
pub const TRANSPORT_BAUD: u32 = 38_400;

/// Radio RX buffer size in bytes. Reads are capped one byte short of this
/// so a full chunk still converts to a bounded string.
pub const TRANSPORT_BUFFER: usize = 256;

/// Bound on a single radio read once bytes are known to be buffered, in
/// milliseconds.
pub const TRANSPORT_READ_TIMEOUT_MS: u64 = 100;

/// Bound on waiting for the next input event while the radio is idle, in
/// milliseconds.
pub const EVENT_WAIT_MS: u64 = 10;

/// Number of LEDs on the status strip.
pub const LED_COUNT: usize = 6;
