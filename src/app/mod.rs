//! Application core — the LED widget and its port boundary.
//!
//! The widget owns LED state and colour logic. All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod commands;
pub mod ports;
pub mod widget;
