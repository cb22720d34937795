//! Output strategies for the LED widget.
//!
//! A [`Renderer`] takes the final RGB triple and pushes it to hardware.
//! [`PwmRenderer`] drives three LEDC-style duty channels;
//! [`StripRenderer`] drives one pixel of an addressable strip.
//! [`OutputRenderer`] picks between them at construction time from
//! [`LedConfig::output`](crate::config::LedConfig::output).

use log::{debug, info};
use smart_leds::RGB8;

use crate::app::ports::{PwmPort, StripPort};
use crate::color::scale_duty;
use crate::config::{LedConfig, OutputMode, PwmConfig, StripConfig};
use crate::error::Error;

pub trait Renderer {
    /// One-shot hardware setup. Does not light the LED.
    fn init(&mut self) -> Result<(), Error>;

    /// Show `rgb`.
    fn render(&mut self, rgb: RGB8) -> Result<(), Error>;
}

// ── PWM ───────────────────────────────────────────────────────

pub struct PwmRenderer<P> {
    port: P,
    config: PwmConfig,
}

impl<P: PwmPort> PwmRenderer<P> {
    pub fn new(port: P, config: PwmConfig) -> Self {
        Self { port, config }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

impl<P: PwmPort> Renderer for PwmRenderer<P> {
    fn init(&mut self) -> Result<(), Error> {
        let timer = self.config.timer;
        self.port.configure_timer(&timer)?;
        for channel in self.config.channels() {
            self.port.configure_channel(&timer, &channel)?;
        }
        info!(
            "renderer: PWM timer {} at {} Hz / {} bit (R=CH{} G=CH{} B=CH{})",
            timer.timer,
            timer.freq_hz,
            timer.resolution_bits,
            self.config.red.channel,
            self.config.green.channel,
            self.config.blue.channel,
        );
        Ok(())
    }

    fn render(&mut self, rgb: RGB8) -> Result<(), Error> {
        let bits = self.config.timer.resolution_bits;
        for (channel, value) in self.config.channels().iter().zip([rgb.r, rgb.g, rgb.b]) {
            let duty = scale_duty(value, bits);
            self.port.set_duty(channel.channel, duty)?;
            self.port.commit(channel.channel)?;
            debug!("renderer: CH{} duty={}", channel.channel, duty);
        }
        Ok(())
    }
}

// ── Addressable strip ─────────────────────────────────────────

pub struct StripRenderer<S> {
    port: S,
    config: StripConfig,
}

impl<S: StripPort> StripRenderer<S> {
    pub fn new(port: S, config: StripConfig) -> Self {
        Self { port, config }
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut S {
        &mut self.port
    }
}

impl<S: StripPort> Renderer for StripRenderer<S> {
    fn init(&mut self) -> Result<(), Error> {
        info!(
            "renderer: strip on GPIO{} (pixel {})",
            self.config.gpio, self.config.pixel
        );
        Ok(())
    }

    fn render(&mut self, rgb: RGB8) -> Result<(), Error> {
        self.port.set_pixel(self.config.pixel, rgb)?;
        self.port.refresh(self.config.refresh_timeout_ms)?;
        Ok(())
    }
}

// ── Runtime selection ─────────────────────────────────────────

/// Either output path, chosen once from configuration.
pub enum OutputRenderer<P, S> {
    Pwm(PwmRenderer<P>),
    Strip(StripRenderer<S>),
}

impl<P: PwmPort, S: StripPort> OutputRenderer<P, S> {
    /// Build the renderer `config.output` selects. Only the matching
    /// port constructor runs.
    pub fn from_config(
        config: &LedConfig,
        pwm: impl FnOnce() -> P,
        strip: impl FnOnce() -> S,
    ) -> Self {
        match config.output {
            OutputMode::Pwm => Self::Pwm(PwmRenderer::new(pwm(), config.pwm)),
            OutputMode::Strip => Self::Strip(StripRenderer::new(strip(), config.strip)),
        }
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            Self::Pwm(_) => OutputMode::Pwm,
            Self::Strip(_) => OutputMode::Strip,
        }
    }
}

impl<P: PwmPort, S: StripPort> Renderer for OutputRenderer<P, S> {
    fn init(&mut self) -> Result<(), Error> {
        match self {
            Self::Pwm(r) => r.init(),
            Self::Strip(r) => r.init(),
        }
    }

    fn render(&mut self, rgb: RGB8) -> Result<(), Error> {
        match self {
            Self::Pwm(r) => r.render(rgb),
            Self::Strip(r) => r.render(rgb),
        }
    }
}
