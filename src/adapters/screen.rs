//! Simulated display panel of virtual LEDs.
//!
//! Boards with a screen draw a row of on/off indicators; each
//! [`LedWidget`](crate::app::widget::LedWidget) with a virtual index
//! mirrors its state into one slot. Stack-allocated, no heap.

use heapless::Vec;
use log::{info, warn};

use crate::app::ports::IndicatorPort;

pub struct VirtualLedPanel<const N: usize> {
    leds: Vec<bool, N>,
}

impl<const N: usize> VirtualLedPanel<N> {
    /// Panel with `count` indicators (capped at `N`), all off.
    pub fn new(count: usize) -> Self {
        let mut leds = Vec::new();
        for _ in 0..count.min(N) {
            let _ = leds.push(false);
        }
        Self { leds }
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<bool> {
        self.leds.get(usize::from(index)).copied()
    }

    pub fn states(&self) -> &[bool] {
        &self.leds
    }
}

impl<const N: usize> IndicatorPort for VirtualLedPanel<N> {
    fn set_virtual_indicator(&mut self, index: u8, on: bool) {
        match self.leds.get_mut(usize::from(index)) {
            Some(slot) => {
                *slot = on;
                info!("screen: vled[{}] = {}", index, if on { "on" } else { "off" });
            }
            None => warn!("screen: no vled at index {} (panel has {})", index, self.leds.len()),
        }
    }
}
