//! LED output configuration
//!
//! Selects the output path (discrete RGB on LEDC PWM, or an addressable
//! strip) and carries the timer / channel / pin parameters for each.
//! Defaults match the reference lighting board; a JSON document can
//! override them at boot.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Highest duty resolution the LEDC low-speed timers accept on all targets.
pub const MAX_RESOLUTION_BITS: u8 = 14;

/// Which hardware renders the LED colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Three duty-cycle channels driving a discrete RGB LED.
    Pwm,
    /// One pixel of an addressable strip.
    Strip,
}

/// LEDC timer parameters shared by the colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmTimer {
    pub timer: u8,
    pub freq_hz: u32,
    pub resolution_bits: u8,
}

impl PwmTimer {
    /// Largest duty value at this resolution.
    pub fn max_duty(&self) -> u32 {
        (1u32 << self.resolution_bits.clamp(1, MAX_RESOLUTION_BITS)) - 1
    }
}

/// One colour channel bound to a GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmChannel {
    pub channel: u8,
    pub gpio: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmConfig {
    pub timer: PwmTimer,
    pub red: PwmChannel,
    pub green: PwmChannel,
    pub blue: PwmChannel,
}

impl PwmConfig {
    /// Channels in R, G, B order.
    pub fn channels(&self) -> [PwmChannel; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            timer: PwmTimer {
                timer: pins::LED_PWM_TIMER,
                freq_hz: pins::LED_PWM_FREQ_HZ,
                resolution_bits: pins::PWM_RESOLUTION_BITS,
            },
            red: PwmChannel {
                channel: pins::LEDC_CH_LED_R,
                gpio: pins::LED_R_GPIO,
            },
            green: PwmChannel {
                channel: pins::LEDC_CH_LED_G,
                gpio: pins::LED_G_GPIO,
            },
            blue: PwmChannel {
                channel: pins::LEDC_CH_LED_B,
                gpio: pins::LED_B_GPIO,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Data GPIO of the strip.
    pub gpio: i32,
    /// Pixel that represents this LED.
    pub pixel: usize,
    /// Refresh timeout handed to the strip driver.
    pub refresh_timeout_ms: u32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            gpio: pins::LED_STRIP_GPIO,
            pixel: 0,
            refresh_timeout_ms: pins::STRIP_REFRESH_TIMEOUT_MS,
        }
    }
}

/// Complete LED configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedConfig {
    pub output: OutputMode,
    pub pwm: PwmConfig,
    pub strip: StripConfig,
    /// Index of the on-screen indicator mirroring on/off, if the board
    /// has a display.
    pub virtual_indicator: Option<u8>,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Pwm,
            pwm: PwmConfig::default(),
            strip: StripConfig::default(),
            virtual_indicator: None,
        }
    }
}

impl LedConfig {
    /// Check ranges and channel / pin uniqueness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timer = &self.pwm.timer;
        if timer.resolution_bits == 0 || timer.resolution_bits > MAX_RESOLUTION_BITS {
            return Err(ConfigError::InvalidResolution(timer.resolution_bits));
        }
        if timer.freq_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }

        let channels = self.pwm.channels();
        for (i, a) in channels.iter().enumerate() {
            for b in &channels[i + 1..] {
                if a.channel == b.channel {
                    return Err(ConfigError::DuplicateChannel(a.channel));
                }
                if a.gpio == b.gpio {
                    return Err(ConfigError::DuplicateGpio(a.gpio));
                }
            }
        }

        if self.strip.refresh_timeout_ms == 0 {
            return Err(ConfigError::ZeroRefreshTimeout);
        }
        Ok(())
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
