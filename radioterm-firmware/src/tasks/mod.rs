//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels and the RX
//! pipe.

pub mod keypad;
pub mod radio_rx;
pub mod terminal;

pub use keypad::keypad_task;
pub use radio_rx::radio_rx_task;
pub use terminal::terminal_task;
