//! Inbound commands to the LED widget.
//!
//! These represent actions requested by the outside world (button,
//! lighting cluster callbacks, serial console) that
//! [`LedWidget::apply`](super::widget::LedWidget::apply) maps onto the
//! widget's setters.

/// Commands that external application logic can send to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// Switch on or off (no-op if already in that state).
    SetOn(bool),

    /// Flip the on/off state.
    Toggle,

    /// Set the global brightness (0–255).
    SetBrightness(u8),

    /// Set hue and saturation (0–255 each).
    SetColor { hue: u8, saturation: u8 },

    /// Attach or detach the on-screen indicator.
    SetVirtualIndex(Option<u8>),
}
