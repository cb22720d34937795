//! Colour types and the HSV → RGB conversion seam.
//!
//! The widget never converts colours itself; it hands an [`Hsv`] to a
//! [`ColorConverter`]. Production firmware uses [`SpectrumConverter`]
//! (the `smart-leds` integer conversion); tests inject recorders.

pub use smart_leds::RGB8;
use smart_leds::hsv::{self, hsv2rgb};

/// Colour in HSV space, 8 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}

/// Pure HSV → RGB conversion.
pub trait ColorConverter {
    fn hsv_to_rgb(&self, hsv: Hsv) -> RGB8;
}

/// Integer spectrum conversion from `smart-leds`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumConverter;

impl ColorConverter for SpectrumConverter {
    fn hsv_to_rgb(&self, c: Hsv) -> RGB8 {
        hsv2rgb(hsv::Hsv {
            hue: c.hue,
            sat: c.sat,
            val: c.val,
        })
    }
}

/// Map an 8-bit colour component onto a timer with `resolution_bits` of
/// duty resolution. Identity at 8 bits; rounds to nearest otherwise.
pub fn scale_duty(value: u8, resolution_bits: u8) -> u32 {
    let max = (1u32 << resolution_bits.clamp(1, 16)) - 1;
    (u32::from(value) * max + 127) / 255
}
