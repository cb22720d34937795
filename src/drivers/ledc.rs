//! LEDC PWM port.
//!
//! Configures the LEDC timer and colour channels using raw ESP-IDF sys
//! calls, and implements the two-phase duty write (`ledc_set_duty` then
//! `ledc_update_duty`).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: programs the LEDC registers in low-speed mode.
//! On host/test: tracks staged and committed duty in-memory only.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

use crate::app::ports::PwmPort;
use crate::config::{PwmChannel, PwmTimer};
use crate::error::PwmError;

/// Low-speed LEDC channels available on every ESP32 variant.
pub const LEDC_CHANNEL_COUNT: usize = 6;

pub struct LedcPwm {
    staged: [u32; LEDC_CHANNEL_COUNT],
    committed: [u32; LEDC_CHANNEL_COUNT],
}

impl LedcPwm {
    pub fn new() -> Self {
        Self {
            staged: [0; LEDC_CHANNEL_COUNT],
            committed: [0; LEDC_CHANNEL_COUNT],
        }
    }

    /// Duty most recently latched on `channel`.
    pub fn committed_duty(&self, channel: u8) -> Option<u32> {
        self.committed.get(usize::from(channel)).copied()
    }

    fn slot(channel: u8) -> Result<usize, PwmError> {
        let idx = usize::from(channel);
        if idx < LEDC_CHANNEL_COUNT {
            Ok(idx)
        } else {
            Err(PwmError::InvalidChannel(channel))
        }
    }
}

impl Default for LedcPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmPort for LedcPwm {
    fn configure_timer(&mut self, timer: &PwmTimer) -> Result<(), PwmError> {
        timer_config_hw(timer)?;
        info!(
            "ledc: timer {} configured ({} Hz, {} bit)",
            timer.timer, timer.freq_hz, timer.resolution_bits
        );
        Ok(())
    }

    fn configure_channel(
        &mut self,
        timer: &PwmTimer,
        channel: &PwmChannel,
    ) -> Result<(), PwmError> {
        let idx = Self::slot(channel.channel)?;
        channel_config_hw(timer, channel)?;
        self.staged[idx] = 0;
        self.committed[idx] = 0;
        info!("ledc: CH{} -> GPIO{}", channel.channel, channel.gpio);
        Ok(())
    }

    fn set_duty(&mut self, channel: u8, duty: u32) -> Result<(), PwmError> {
        let idx = Self::slot(channel)?;
        set_duty_hw(channel, duty)?;
        self.staged[idx] = duty;
        Ok(())
    }

    fn commit(&mut self, channel: u8) -> Result<(), PwmError> {
        let idx = Self::slot(channel)?;
        update_duty_hw(channel)?;
        self.committed[idx] = self.staged[idx];
        Ok(())
    }
}

// ── Register access ───────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn timer_config_hw(timer: &PwmTimer) -> Result<(), PwmError> {
    let cfg = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: u32::from(timer.timer),
        duty_resolution: u32::from(timer.resolution_bits),
        freq_hz: timer.freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: called from the single-threaded init path; the config struct
    // outlives the call.
    let ret = unsafe { ledc_timer_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(PwmError::TimerConfigFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn timer_config_hw(_timer: &PwmTimer) -> Result<(), PwmError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
fn channel_config_hw(timer: &PwmTimer, channel: &PwmChannel) -> Result<(), PwmError> {
    let cfg = ledc_channel_config_t {
        gpio_num: channel.gpio,
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel: u32::from(channel.channel),
        intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
        timer_sel: u32::from(timer.timer),
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    // SAFETY: single-threaded init path; timer was configured first.
    let ret = unsafe { ledc_channel_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(PwmError::ChannelConfigFailed(channel.channel));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn channel_config_hw(_timer: &PwmTimer, _channel: &PwmChannel) -> Result<(), PwmError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
fn set_duty_hw(channel: u8, duty: u32) -> Result<(), PwmError> {
    // SAFETY: channel was configured in configure_channel(); the widget is
    // the only writer of these duty registers.
    let ret = unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel), duty)
    };
    if ret != ESP_OK as i32 {
        return Err(PwmError::DutyWriteFailed(channel));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn set_duty_hw(_channel: u8, _duty: u32) -> Result<(), PwmError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
fn update_duty_hw(channel: u8) -> Result<(), PwmError> {
    // SAFETY: see set_duty_hw().
    let ret = unsafe { ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel)) };
    if ret != ESP_OK as i32 {
        return Err(PwmError::UpdateFailed(channel));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn update_duty_hw(_channel: u8) -> Result<(), PwmError> {
    Ok(())
}
