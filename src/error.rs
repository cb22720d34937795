//! Error types for the LED widget.
//!
//! A single `Error` enum that every output path converts into. All
//! variants are `Copy` so they can be logged and dropped inside the
//! render path without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A PWM timer or channel operation failed.
    Pwm(PwmError),
    /// The addressable strip rejected a pixel or refresh.
    Strip(StripError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm(e) => write!(f, "pwm: {e}"),
            Self::Strip(e) => write!(f, "strip: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// PWM errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// `ledc_timer_config` (or equivalent) returned a non-OK code.
    TimerConfigFailed(i32),
    /// Channel could not be bound to its GPIO / timer.
    ChannelConfigFailed(u8),
    /// Duty register write failed.
    DutyWriteFailed(u8),
    /// Latching the staged duty into hardware failed.
    UpdateFailed(u8),
    /// Channel number is not driven by this port.
    InvalidChannel(u8),
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerConfigFailed(rc) => write!(f, "timer config failed (rc={rc})"),
            Self::ChannelConfigFailed(ch) => write!(f, "channel {ch} config failed"),
            Self::DutyWriteFailed(ch) => write!(f, "channel {ch} duty write failed"),
            Self::UpdateFailed(ch) => write!(f, "channel {ch} duty update failed"),
            Self::InvalidChannel(ch) => write!(f, "channel {ch} not available"),
        }
    }
}

impl core::error::Error for PwmError {}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

// ---------------------------------------------------------------------------
// Strip errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Pixel index is beyond the strip length.
    PixelOutOfRange(usize),
    /// The underlying driver failed to transmit the frame.
    WriteFailed,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfRange(i) => write!(f, "pixel {i} out of range"),
            Self::WriteFailed => write!(f, "frame write failed"),
        }
    }
}

impl core::error::Error for StripError {}

impl From<StripError> for Error {
    fn from(e: StripError) -> Self {
        Self::Strip(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Duty resolution outside what the LEDC timer supports.
    InvalidResolution(u8),
    /// PWM frequency of zero.
    ZeroFrequency,
    /// Two colours share one LEDC channel.
    DuplicateChannel(u8),
    /// Two colours share one GPIO.
    DuplicateGpio(i32),
    /// Strip refresh timeout of zero.
    ZeroRefreshTimeout,
    /// Input was not a valid configuration document.
    Parse,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution(bits) => write!(f, "invalid duty resolution: {bits} bits"),
            Self::ZeroFrequency => write!(f, "PWM frequency must be non-zero"),
            Self::DuplicateChannel(ch) => write!(f, "LEDC channel {ch} assigned twice"),
            Self::DuplicateGpio(pin) => write!(f, "GPIO {pin} assigned twice"),
            Self::ZeroRefreshTimeout => write!(f, "strip refresh timeout must be non-zero"),
            Self::Parse => write!(f, "malformed configuration"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
