//! LED widget — the stateful core.
//!
//! [`LedWidget`] owns on/off, brightness, hue and saturation. Every
//! effective mutation re-renders: the colour shown is always
//! `hsv_to_rgb(hue, saturation, if on { brightness } else { 0 })`.
//!
//! ```text
//!  LedCommand ──▶ ┌──────────────┐ ──▶ Renderer (PWM | strip)
//!                 │  LedWidget   │
//!                 └──────────────┘ ──▶ IndicatorPort (screen)
//! ```
//!
//! Setters are fire-and-forget: hardware failures during render are
//! logged and otherwise ignored, and the new state is kept.

use log::{info, warn};

use crate::color::{ColorConverter, Hsv, SpectrumConverter};
use crate::drivers::renderer::Renderer;
use crate::error::Error;

use super::commands::LedCommand;
use super::ports::{IndicatorPort, NoIndicator};

pub struct LedWidget<R, I = NoIndicator, C = SpectrumConverter> {
    renderer: R,
    indicator: I,
    converter: C,
    on: bool,
    brightness: u8,
    hue: u8,
    saturation: u8,
    virtual_index: Option<u8>,
}

impl<R: Renderer> LedWidget<R> {
    /// Widget without a display mirror, using the default converter.
    pub fn new(renderer: R) -> Self {
        Self::with_parts(renderer, NoIndicator, SpectrumConverter)
    }
}

impl<R: Renderer, I: IndicatorPort> LedWidget<R, I> {
    pub fn with_indicator(renderer: R, indicator: I) -> Self {
        Self::with_parts(renderer, indicator, SpectrumConverter)
    }
}

impl<R: Renderer, I: IndicatorPort, C: ColorConverter> LedWidget<R, I, C> {
    pub fn with_parts(renderer: R, indicator: I, converter: C) -> Self {
        Self {
            renderer,
            indicator,
            converter,
            on: false,
            brightness: u8::MAX,
            hue: 0,
            saturation: 0,
            virtual_index: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset to off / full brightness / no colour and set up the output
    /// hardware. Nothing is rendered until the first effective setter.
    pub fn init(&mut self) -> Result<(), Error> {
        self.on = false;
        self.brightness = u8::MAX;
        self.hue = 0;
        self.saturation = 0;
        self.renderer.init()?;
        info!("led_widget: initialised");
        Ok(())
    }

    // ── Setters ───────────────────────────────────────────────

    pub fn set_on(&mut self, on: bool) {
        info!("led_widget: setting state to {}", u8::from(on));
        if on == self.on {
            return;
        }
        self.on = on;
        self.do_set();
    }

    /// Flip on/off. Always renders.
    pub fn toggle(&mut self) {
        info!("led_widget: toggling state to {}", u8::from(!self.on));
        self.on = !self.on;
        self.do_set();
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        info!("led_widget: setting brightness to {}", brightness);
        if brightness == self.brightness {
            return;
        }
        self.brightness = brightness;
        self.do_set();
    }

    pub fn set_color(&mut self, hue: u8, saturation: u8) {
        info!("led_widget: setting color to {}, {}", hue, saturation);
        if hue == self.hue && saturation == self.saturation {
            return;
        }
        self.hue = hue;
        self.saturation = saturation;
        self.do_set();
    }

    /// Attach (`Some`) or detach (`None`) the on-screen indicator. An
    /// attached indicator immediately receives the current state.
    pub fn set_virtual_index(&mut self, index: Option<u8>) {
        self.virtual_index = index;
        if let Some(index) = index {
            self.indicator.set_virtual_indicator(index, self.on);
        }
    }

    /// Dispatch an inbound command.
    pub fn apply(&mut self, command: LedCommand) {
        match command {
            LedCommand::SetOn(on) => self.set_on(on),
            LedCommand::Toggle => self.toggle(),
            LedCommand::SetBrightness(b) => self.set_brightness(b),
            LedCommand::SetColor { hue, saturation } => self.set_color(hue, saturation),
            LedCommand::SetVirtualIndex(index) => self.set_virtual_index(index),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn virtual_index(&self) -> Option<u8> {
        self.virtual_index
    }

    /// The HSV the next render would use.
    pub fn current_hsv(&self) -> Hsv {
        let val = if self.on { self.brightness } else { 0 };
        Hsv::new(self.hue, self.saturation, val)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    // ── Internal ──────────────────────────────────────────────

    fn do_set(&mut self) {
        let rgb = self.converter.hsv_to_rgb(self.current_hsv());
        info!("led_widget: rendering {}, {}, {}", rgb.r, rgb.g, rgb.b);
        if let Err(e) = self.renderer.render(rgb) {
            warn!("led_widget: render failed: {}", e);
        }
        if let Some(index) = self.virtual_index {
            self.indicator.set_virtual_indicator(index, self.on);
        }
    }
}
