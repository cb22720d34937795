//! LED widget firmware library.
//!
//! Maps a logical LED (on/off, brightness, hue/saturation) onto a
//! PWM-driven RGB LED or an addressable strip pixel, with an optional
//! on-screen mirror. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, so the crate
//! builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod color;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
