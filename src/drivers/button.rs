//! Polled, debounced button with short and long press detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up. The main loop samples the
//! level every few milliseconds and feeds it to [`ButtonDriver::tick`],
//! which runs the debounce + gesture state machine.
//!
//! ## Gesture detection
//!
//! | Gesture     | Condition                       | Event        |
//! |-------------|---------------------------------|--------------|
//! | Short press | Stable press released before 1s | `ShortPress` |
//! | Long press  | Held for 1s or longer           | `LongPress`  |

const DEBOUNCE_MS: u32 = 30;
const LONG_PRESS_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress,
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    DebounceWait { since_ms: u32 },
    Pressed { since_ms: u32 },
    /// Long press already reported; wait for release.
    Held,
}

pub struct ButtonDriver {
    state: GestureState,
}

impl ButtonDriver {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    /// Call from the main loop with the current time and whether the
    /// button is electrically pressed.
    pub fn tick(&mut self, now_ms: u32, pressed: bool) -> Option<ButtonEvent> {
        match self.state {
            GestureState::Idle => {
                if pressed {
                    self.state = GestureState::DebounceWait { since_ms: now_ms };
                }
                None
            }

            GestureState::DebounceWait { since_ms } => {
                if !pressed {
                    self.state = GestureState::Idle;
                } else if now_ms.wrapping_sub(since_ms) >= DEBOUNCE_MS {
                    self.state = GestureState::Pressed { since_ms };
                }
                None
            }

            GestureState::Pressed { since_ms } => {
                if !pressed {
                    self.state = GestureState::Idle;
                    return Some(ButtonEvent::ShortPress);
                }
                if now_ms.wrapping_sub(since_ms) >= LONG_PRESS_MS {
                    self.state = GestureState::Held;
                    return Some(ButtonEvent::LongPress);
                }
                None
            }

            GestureState::Held => {
                if !pressed {
                    self.state = GestureState::Idle;
                }
                None
            }
        }
    }
}

impl Default for ButtonDriver {
    fn default() -> Self {
        Self::new()
    }
}
