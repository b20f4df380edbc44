//! Inter-task communication channels
//!
//! Static channels connecting the pump tasks to the terminal event loop.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use radioterm_core::event::InputEvent;

/// Channel capacity for keypad input events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Input events from the keypad controller
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();
