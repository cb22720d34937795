//! LED widget firmware — main entry point.
//!
//! ```text
//!  BOOT button ──▶ ButtonDriver ──▶ LedCommand ──▶ LedWidget
//!                                                   │
//!                         OutputRenderer (LEDC | WS2812 RMT)
//!                         VirtualLedPanel (screen mirror)
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};
use ws2812_esp32_rmt_driver::Ws2812Esp32Rmt;

use ledwidget::adapters::screen::VirtualLedPanel;
use ledwidget::app::commands::LedCommand;
use ledwidget::app::widget::LedWidget;
use ledwidget::config::{LedConfig, OutputMode};
use ledwidget::drivers::button::{ButtonDriver, ButtonEvent};
use ledwidget::drivers::ledc::LedcPwm;
use ledwidget::drivers::renderer::{OutputRenderer, PwmRenderer, StripRenderer};
use ledwidget::drivers::strip::SmartLedStrip;
use ledwidget::pins;

/// Pixels on the on-board strip.
const STRIP_LEN: usize = 1;
/// Virtual LEDs drawn on the display.
const PANEL_LEDS: usize = 4;
const POLL_MS: u32 = 10;
/// Hue step applied on every long press.
const HUE_STEP: u8 = 32;

/// Optional JSON override baked in at build time.
const CONFIG_OVERRIDE: Option<&str> = option_env!("LEDWIDGET_CONFIG_JSON");

type Output = OutputRenderer<LedcPwm, SmartLedStrip<Ws2812Esp32Rmt<'static>, STRIP_LEN>>;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    info!("LedWidget v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = match CONFIG_OVERRIDE.map(LedConfig::from_json) {
        Some(Ok(cfg)) => {
            info!("Config override applied ({:?} output)", cfg.output);
            cfg
        }
        Some(Err(e)) => {
            warn!("Config override rejected ({}), using defaults", e);
            LedConfig::default()
        }
        None => LedConfig::default(),
    };
    config.validate()?;

    // ── 3. Output path ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let renderer: Output = match config.output {
        OutputMode::Pwm => OutputRenderer::Pwm(PwmRenderer::new(LedcPwm::new(), config.pwm)),
        OutputMode::Strip => {
            // SAFETY: the strip GPIO is reserved for the LED on this board
            // and not handed out anywhere else.
            let pin = unsafe { AnyOutputPin::new(config.strip.gpio) };
            let driver = Ws2812Esp32Rmt::new(peripherals.rmt.channel0, pin)
                .map_err(|e| anyhow::anyhow!("WS2812 RMT init failed: {e:?}"))?;
            OutputRenderer::Strip(StripRenderer::new(SmartLedStrip::new(driver), config.strip))
        }
    };

    // ── 4. Widget ─────────────────────────────────────────────
    let panel: VirtualLedPanel<PANEL_LEDS> = VirtualLedPanel::new(PANEL_LEDS);
    let mut led = LedWidget::with_indicator(renderer, panel);
    led.init()?;
    led.apply(LedCommand::SetVirtualIndex(config.virtual_indicator));
    led.apply(LedCommand::SetOn(true));

    // ── 5. Button loop ────────────────────────────────────────
    // SAFETY: the BOOT strap pin is only read here.
    let mut button_pin = PinDriver::input(unsafe { AnyInputPin::new(pins::BUTTON_GPIO) })?;
    button_pin.set_pull(Pull::Up)?;
    let mut button = ButtonDriver::new();
    let mut now_ms: u32 = 0;

    info!("Entering main loop");
    loop {
        match button.tick(now_ms, button_pin.is_low()) {
            Some(ButtonEvent::ShortPress) => led.apply(LedCommand::Toggle),
            Some(ButtonEvent::LongPress) => led.apply(LedCommand::SetColor {
                hue: led.hue().wrapping_add(HUE_STEP),
                saturation: u8::MAX,
            }),
            None => {}
        }
        FreeRtos::delay_ms(POLL_MS);
        now_ms = now_ms.wrapping_add(POLL_MS);
    }
}
