//! Render gate for the Radioterm terminal
//!
//! Turns a point-in-time snapshot of the terminal state into
//! `embedded-graphics` draw calls. From the core's perspective this is a
//! pure function of its inputs; pixel format and panel transfer belong to
//! the firmware's panel driver.

#![no_std]
#![deny(unsafe_code)]

pub mod theme;

mod renderer;

pub use renderer::{draw_terminal, draw_wallpaper};
