//! Integration tests: LedWidget over the concrete output adapters
//! (host-simulated LEDC, embedded-hal PWM, smart-leds strip, screen panel).

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use ledwidget::adapters::screen::VirtualLedPanel;
use ledwidget::app::widget::LedWidget;
use ledwidget::color::RGB8;
use ledwidget::config::{LedConfig, OutputMode, PwmConfig, StripConfig};
use ledwidget::drivers::hal_pwm::HalPwm;
use ledwidget::drivers::ledc::LedcPwm;
use ledwidget::drivers::renderer::{OutputRenderer, PwmRenderer, StripRenderer};
use ledwidget::drivers::strip::SmartLedStrip;
use smart_leds::SmartLedsWrite;

// ── Fakes for third-party traits ──────────────────────────────

#[derive(Default)]
struct FakeWs2812 {
    frames: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for FakeWs2812 {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

struct Counter {
    duty: u16,
}

impl ErrorType for Counter {
    type Error = Infallible;
}

impl SetDutyCycle for Counter {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn ledc_sim_latches_white_when_switched_on() {
    let cfg = PwmConfig::default();
    let mut led = LedWidget::new(PwmRenderer::new(LedcPwm::new(), cfg));
    led.init().unwrap();
    led.set_on(true);

    let ledc = led.renderer().port();
    for ch in cfg.channels() {
        assert_eq!(ledc.committed_duty(ch.channel), Some(255));
    }

    led.set_on(false);
    let ledc = led.renderer().port();
    for ch in cfg.channels() {
        assert_eq!(ledc.committed_duty(ch.channel), Some(0));
    }
}

#[test]
fn ledc_sim_scales_brightness() {
    let mut led = LedWidget::new(PwmRenderer::new(LedcPwm::new(), PwmConfig::default()));
    led.init().unwrap();
    led.set_on(true);
    led.set_brightness(128);
    assert_eq!(led.renderer().port().committed_duty(0), Some(128));
}

#[test]
fn embedded_hal_channels_follow_the_widget() {
    let cfg = PwmConfig::default();
    let port = HalPwm::new(&cfg, Counter { duty: 0 }, Counter { duty: 0 }, Counter { duty: 0 });
    let mut led = LedWidget::new(PwmRenderer::new(port, cfg));
    led.init().unwrap();
    led.set_on(true);
    let (r, g, b) = led.renderer().port().outputs();
    assert_eq!((r.duty, g.duty, b.duty), (255, 255, 255));

    led.set_brightness(100);
    let (r, g, b) = led.renderer().port().outputs();
    assert_eq!((r.duty, g.duty, b.duty), (100, 100, 100));
}

#[test]
fn strip_receives_full_frame_on_every_render() {
    let strip: SmartLedStrip<FakeWs2812, 2> = SmartLedStrip::new(FakeWs2812::default());
    let config = StripConfig {
        pixel: 1,
        ..StripConfig::default()
    };
    let mut led = LedWidget::new(StripRenderer::new(strip, config));
    led.init().unwrap();
    led.set_on(true);
    led.set_on(false);

    let frames = &led.renderer().port().writer().frames;
    assert_eq!(
        frames,
        &vec![
            vec![RGB8::default(), RGB8::new(255, 255, 255)],
            vec![RGB8::default(), RGB8::new(0, 0, 0)],
        ]
    );
}

#[test]
fn strip_pixel_out_of_range_does_not_panic() {
    let strip: SmartLedStrip<FakeWs2812, 1> = SmartLedStrip::new(FakeWs2812::default());
    let config = StripConfig {
        pixel: 4,
        ..StripConfig::default()
    };
    let mut led = LedWidget::new(StripRenderer::new(strip, config));
    led.init().unwrap();
    led.toggle();

    assert!(led.is_on());
    assert!(led.renderer().port().writer().frames.is_empty());
}

#[test]
fn screen_panel_mirrors_configured_index() {
    let mut config = LedConfig::default();
    config.output = OutputMode::Strip;
    config.virtual_indicator = Some(1);

    let renderer: OutputRenderer<LedcPwm, SmartLedStrip<FakeWs2812, 1>> =
        OutputRenderer::from_config(&config, LedcPwm::new, || {
            SmartLedStrip::new(FakeWs2812::default())
        });
    let panel: VirtualLedPanel<4> = VirtualLedPanel::new(4);
    let mut led = LedWidget::with_indicator(renderer, panel);
    led.init().unwrap();
    led.set_virtual_index(config.virtual_indicator);
    led.set_on(true);

    assert_eq!(led.indicator().states(), &[false, true, false, false]);

    led.toggle();
    assert_eq!(led.indicator().get(1), Some(false));
}
