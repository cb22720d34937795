//! Port traits — the boundary between the LED widget and the hardware.
//!
//! ```text
//!   LedWidget ──▶ Renderer ──▶ PwmPort / StripPort ──▶ peripheral
//!       └──────────────────▶ IndicatorPort ──▶ display
//! ```
//!
//! Driven adapters (LEDC, embedded-hal PWM, smart-leds strips, the
//! simulated screen) implement these traits. The widget and renderers
//! consume them via generics, so tests substitute recording doubles.

use smart_leds::RGB8;

use crate::config::{PwmChannel, PwmTimer};
use crate::error::{PwmError, StripError};

// ───────────────────────────────────────────────────────────────
// PWM port (three duty-cycle channels)
// ───────────────────────────────────────────────────────────────

/// Timer + channel PWM peripheral.
///
/// Duty writes are two-phase: [`set_duty`](PwmPort::set_duty) stages a
/// value and [`commit`](PwmPort::commit) latches it into the output.
pub trait PwmPort {
    /// Configure the shared timer (frequency and duty resolution).
    fn configure_timer(&mut self, timer: &PwmTimer) -> Result<(), PwmError>;

    /// Bind `channel` to its GPIO on `timer`, starting at duty 0.
    fn configure_channel(&mut self, timer: &PwmTimer, channel: &PwmChannel)
    -> Result<(), PwmError>;

    /// Stage a duty value for `channel`.
    fn set_duty(&mut self, channel: u8, duty: u32) -> Result<(), PwmError>;

    /// Latch the staged duty of `channel`.
    fn commit(&mut self, channel: u8) -> Result<(), PwmError>;
}

// ───────────────────────────────────────────────────────────────
// Strip port (addressable LEDs)
// ───────────────────────────────────────────────────────────────

pub trait StripPort {
    /// Update one pixel in the frame buffer.
    fn set_pixel(&mut self, index: usize, rgb: RGB8) -> Result<(), StripError>;

    /// Push the frame buffer to the strip.
    fn refresh(&mut self, timeout_ms: u32) -> Result<(), StripError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (on-screen mirror)
// ───────────────────────────────────────────────────────────────

/// Display subsystem that draws virtual LEDs.
pub trait IndicatorPort {
    fn set_virtual_indicator(&mut self, index: u8, on: bool);
}

/// Board without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl IndicatorPort for NoIndicator {
    fn set_virtual_indicator(&mut self, _index: u8, _on: bool) {}
}
