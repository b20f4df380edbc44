//! Hardware abstraction traits for the Radioterm firmware
//!
//! The terminal core drives its peripherals through these narrow contracts;
//! chip-specific implementations live in the firmware crate.

#![no_std]
#![deny(unsafe_code)]
#![allow(async_fn_in_trait)]

pub mod led;
pub mod panel;
pub mod serial;
