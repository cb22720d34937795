//! GPIO / peripheral pin assignments for the lighting board.
//!
//! Single source of truth — the default [`LedConfig`](crate::config::LedConfig)
//! and the firmware entry point reference this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Discrete RGB LED (three LEDC PWM channels)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 2;
pub const LED_G_GPIO: i32 = 4;
pub const LED_B_GPIO: i32 = 5;

pub const LEDC_CH_LED_R: u8 = 0;
pub const LEDC_CH_LED_G: u8 = 1;
pub const LEDC_CH_LED_B: u8 = 2;

// ---------------------------------------------------------------------------
// Addressable LED (WS2812 on the RMT peripheral)
// ---------------------------------------------------------------------------

/// Data line of the on-board addressable LED.
pub const LED_STRIP_GPIO: i32 = 8;
/// Upper bound for a single strip refresh.
pub const STRIP_REFRESH_TIMEOUT_MS: u32 = 100;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer shared by the three colour channels.
pub const LED_PWM_TIMER: u8 = 1;
/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u8 = 8;
/// LEDC frequency for the RGB LED (5 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 5_000;

// ---------------------------------------------------------------------------
// User button (active-low, BOOT strap on most dev kits)
// ---------------------------------------------------------------------------

pub const BUTTON_GPIO: i32 = 0;
