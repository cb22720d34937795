//! `PwmPort` over three `embedded-hal` PWM channels.
//!
//! For boards whose HAL already hands out configured
//! [`SetDutyCycle`] channels (LEDC drivers from `esp-idf-hal`, timers on
//! other MCUs). Timer / channel configuration is owned by that HAL, so
//! `configure_*` only records the resolution and zeroes the outputs.

use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::PwmPort;
use crate::config::{PwmChannel, PwmConfig, PwmTimer};
use crate::error::PwmError;

pub struct HalPwm<R, G, B> {
    red: R,
    green: G,
    blue: B,
    /// LEDC-style channel numbers in R, G, B order.
    channels: [u8; 3],
    staged: [u32; 3],
    max_duty: u32,
}

impl<R, G, B> HalPwm<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// `config` supplies the channel numbers the renderer will address
    /// and the initial resolution.
    pub fn new(config: &PwmConfig, red: R, green: G, blue: B) -> Self {
        Self {
            red,
            green,
            blue,
            channels: config.channels().map(|c| c.channel),
            staged: [0; 3],
            max_duty: config.timer.max_duty(),
        }
    }

    pub fn outputs(&self) -> (&R, &G, &B) {
        (&self.red, &self.green, &self.blue)
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn slot(&self, channel: u8) -> Result<usize, PwmError> {
        self.channels
            .iter()
            .position(|&c| c == channel)
            .ok_or(PwmError::InvalidChannel(channel))
    }

    fn write(&mut self, slot: usize, duty: u32) -> Result<(), PwmError> {
        let denom = self.max_duty.min(u32::from(u16::MAX)) as u16;
        let num = duty.min(u32::from(denom)) as u16;
        let channel = self.channels[slot];
        let res = match slot {
            0 => self.red.set_duty_cycle_fraction(num, denom).map_err(|_| ()),
            1 => self.green.set_duty_cycle_fraction(num, denom).map_err(|_| ()),
            _ => self.blue.set_duty_cycle_fraction(num, denom).map_err(|_| ()),
        };
        res.map_err(|()| PwmError::UpdateFailed(channel))
    }
}

impl<R, G, B> PwmPort for HalPwm<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn configure_timer(&mut self, timer: &PwmTimer) -> Result<(), PwmError> {
        self.max_duty = timer.max_duty();
        Ok(())
    }

    fn configure_channel(
        &mut self,
        _timer: &PwmTimer,
        channel: &PwmChannel,
    ) -> Result<(), PwmError> {
        let slot = self
            .slot(channel.channel)
            .map_err(|_| PwmError::ChannelConfigFailed(channel.channel))?;
        self.staged[slot] = 0;
        self.write(slot, 0)
    }

    fn set_duty(&mut self, channel: u8, duty: u32) -> Result<(), PwmError> {
        let slot = self.slot(channel)?;
        self.staged[slot] = duty;
        Ok(())
    }

    fn commit(&mut self, channel: u8) -> Result<(), PwmError> {
        let slot = self.slot(channel)?;
        self.write(slot, self.staged[slot])
    }
}
