//! Board-agnostic core logic for the Radioterm terminal firmware
//!
//! This crate contains all terminal logic that does not depend on
//! specific hardware implementations:
//!
//! - Bounded scrollback of received text lines
//! - Single-line input editor
//! - Input event decoding
//! - Status LED overlay frame
//! - Event routing (the terminal state owned by the event loop)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod editor;
pub mod event;
pub mod led;
pub mod scrollback;
pub mod terminal;
