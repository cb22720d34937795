//! Peripheral drivers: render strategies, the PWM / strip adapters they
//! write through, and the user button.

pub mod button;
pub mod hal_pwm;
pub mod ledc;
pub mod renderer;
pub mod strip;
