//! Integration tests: LedWidget → renderer → mock ports.

use ledwidget::app::commands::LedCommand;
use ledwidget::app::widget::LedWidget;
use ledwidget::color::{Hsv, RGB8};
use ledwidget::config::{LedConfig, OutputMode, PwmConfig};
use ledwidget::drivers::renderer::{OutputRenderer, PwmRenderer};

use crate::mock_hw::{MockIndicator, MockPwm, MockStrip, PwmCall, RecordingConverter, StripCall};

type PwmWidget = LedWidget<PwmRenderer<MockPwm>, MockIndicator, RecordingConverter>;

fn pwm_widget_with(pwm: MockPwm) -> PwmWidget {
    let renderer = PwmRenderer::new(pwm, PwmConfig::default());
    let mut led = LedWidget::with_parts(
        renderer,
        MockIndicator::default(),
        RecordingConverter::default(),
    );
    led.init().unwrap();
    led
}

fn pwm_widget() -> PwmWidget {
    pwm_widget_with(MockPwm::new())
}

fn renders(led: &PwmWidget) -> usize {
    led.converter().renders()
}

#[test]
fn init_programs_timer_and_three_channels_without_rendering() {
    let led = pwm_widget();
    assert_eq!(
        led.renderer().port().calls,
        vec![
            PwmCall::Timer {
                timer: 1,
                freq_hz: 5_000,
                bits: 8
            },
            PwmCall::Channel { channel: 0, gpio: 2 },
            PwmCall::Channel { channel: 1, gpio: 4 },
            PwmCall::Channel { channel: 2, gpio: 5 },
        ]
    );
    assert_eq!(renders(&led), 0);
    assert!(!led.is_on());
    assert_eq!(led.brightness(), 255);
    assert_eq!((led.hue(), led.saturation()), (0, 0));
}

#[test]
fn repeated_brightness_renders_once() {
    let mut led = pwm_widget();
    led.set_brightness(42);
    led.set_brightness(42);
    assert_eq!(renders(&led), 1);
    assert_eq!(led.renderer().port().commit_count(), 3);
}

#[test]
fn set_on_to_current_state_is_a_no_op() {
    let mut led = pwm_widget();
    led.set_on(false);
    assert_eq!(renders(&led), 0);

    led.set_on(true);
    led.set_on(true);
    assert_eq!(renders(&led), 1);
}

#[test]
fn toggle_flips_and_renders_every_time() {
    let mut led = pwm_widget();
    for expected in [true, false, true] {
        led.toggle();
        assert_eq!(led.is_on(), expected);
    }
    assert_eq!(renders(&led), 3);
}

#[test]
fn effective_value_follows_on_flag() {
    let mut led = pwm_widget();
    led.set_brightness(200);
    assert_eq!(led.converter().last().map(|h| h.val), Some(0));

    led.set_on(true);
    assert_eq!(led.converter().last().map(|h| h.val), Some(200));

    led.set_on(false);
    assert_eq!(led.converter().last().map(|h| h.val), Some(0));
    assert_eq!(led.brightness(), 200);
}

#[test]
fn unchanged_color_is_a_no_op() {
    let mut led = pwm_widget();
    led.set_color(0, 0);
    assert_eq!(renders(&led), 0);

    led.set_color(5, 6);
    led.set_color(5, 6);
    assert_eq!(renders(&led), 1);

    // Changing only one component still renders.
    led.set_color(5, 7);
    assert_eq!(renders(&led), 2);
}

#[test]
fn scenario_on_brightness_color_renders_three_times() {
    let mut led = pwm_widget();
    led.set_on(true);
    led.set_brightness(128);
    led.set_color(10, 200);

    assert_eq!(renders(&led), 3);
    assert_eq!(led.converter().last(), Some(Hsv::new(10, 200, 128)));

    let commits = led.renderer().port().commits();
    assert_eq!(commits.len(), 9);
    assert_eq!(&commits[6..], &[(0, 10), (1, 200), (2, 128)]);
}

#[test]
fn render_failure_is_swallowed() {
    let mut led = pwm_widget_with(MockPwm {
        fail_duty_on: Some(1),
        ..MockPwm::default()
    });
    led.set_on(true);

    assert!(led.is_on());
    assert_eq!(renders(&led), 1);
    // Red went out before green failed; blue was never reached.
    assert_eq!(led.renderer().port().commits(), vec![(0, 0)]);
}

#[test]
fn virtual_indicator_mirrors_on_state() {
    let mut led = pwm_widget();
    led.set_on(true); // no index yet
    led.set_virtual_index(Some(3));
    led.toggle();
    led.set_brightness(9);

    assert_eq!(led.indicator().writes, vec![(3, true), (3, false), (3, false)]);
}

#[test]
fn clearing_virtual_index_stops_mirroring() {
    let mut led = pwm_widget();
    led.set_virtual_index(Some(1));
    led.set_virtual_index(None);
    led.toggle();
    assert_eq!(led.indicator().writes, vec![(1, false)]);
    assert_eq!(led.virtual_index(), None);
}

#[test]
fn commands_drive_the_same_paths_as_setters() {
    let mut led = pwm_widget();
    for cmd in [
        LedCommand::SetOn(true),
        LedCommand::SetOn(true),
        LedCommand::SetBrightness(128),
        LedCommand::SetColor {
            hue: 10,
            saturation: 200,
        },
        LedCommand::SetVirtualIndex(Some(0)),
    ] {
        led.apply(cmd);
    }
    assert_eq!(renders(&led), 3);
    assert_eq!(led.current_hsv(), Hsv::new(10, 200, 128));
    assert_eq!(led.indicator().writes, vec![(0, true)]);
}

#[test]
fn strip_mode_sets_pixel_and_refreshes() {
    let mut config = LedConfig::default();
    config.output = OutputMode::Strip;
    config.strip.pixel = 2;
    let renderer: OutputRenderer<MockPwm, MockStrip> =
        OutputRenderer::from_config(&config, MockPwm::new, MockStrip::default);

    let mut led = LedWidget::with_parts(
        renderer,
        MockIndicator::default(),
        RecordingConverter::default(),
    );
    led.init().unwrap();
    led.set_on(true);
    led.set_color(1, 2);

    let OutputRenderer::Strip(strip) = led.renderer() else {
        panic!("expected strip renderer");
    };
    assert_eq!(
        strip.port().calls,
        vec![
            StripCall::Pixel {
                index: 2,
                rgb: RGB8::new(0, 0, 255)
            },
            StripCall::Refresh { timeout_ms: 100 },
            StripCall::Pixel {
                index: 2,
                rgb: RGB8::new(1, 2, 255)
            },
            StripCall::Refresh { timeout_ms: 100 },
        ]
    );
}
