//! Addressable strip adapter.
//!
//! Wraps any `smart-leds` writer (the RMT WS2812 driver on ESP-IDF)
//! behind [`StripPort`]: pixels are staged in a fixed `N`-pixel frame and
//! the whole frame is transmitted on refresh.

use log::debug;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::app::ports::StripPort;
use crate::error::StripError;

pub struct SmartLedStrip<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
}

impl<W, const N: usize> SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
        }
    }

    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> StripPort for SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn set_pixel(&mut self, index: usize, rgb: RGB8) -> Result<(), StripError> {
        let pixel = self
            .frame
            .get_mut(index)
            .ok_or(StripError::PixelOutOfRange(index))?;
        *pixel = rgb;
        Ok(())
    }

    /// The RMT writer blocks until the frame is on the wire, so the
    /// timeout only bounds callers that queue frames asynchronously.
    fn refresh(&mut self, timeout_ms: u32) -> Result<(), StripError> {
        debug!("strip: refresh {} px (timeout {} ms)", N, timeout_ms);
        self.writer
            .write(self.frame.iter().copied())
            .map_err(|_| StripError::WriteFailed)
    }
}
