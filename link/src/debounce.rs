//! # Debounced Button Input
//!
//! Turns a bouncing, active-low push button into one press per physical
//! press.
//!
//! ## Algorithm
//!
//! - **Press**: a low read while released starts the settle window. The pin
//!   is re-read [`DebounceConfig::samples`] times, [`DebounceConfig::step_us`]
//!   apart. It must read low every time; a single high read rejects the
//!   press as noise.
//! - **Hold**: once a press is confirmed the button is *held*. Further low
//!   reads report nothing until a release is confirmed.
//! - **Release**: a high read while held starts the same settle window,
//!   which must read high throughout before the button counts as released.
//!
//! [`DebouncedButton::pressed`] therefore returns `true` exactly once per
//! press, whether it is driven from a polling loop or from an edge handler.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::DebounceConfig;
use crate::error::LinkError;

/// Active-low push button with a settle-window debouncer.
pub struct DebouncedButton<P, D> {
    pin: P,
    delay: D,
    config: DebounceConfig,
    held: bool,
}

impl<P, D> DebouncedButton<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D, config: DebounceConfig) -> Self {
        Self {
            pin,
            delay,
            config,
            held: false,
        }
    }

    /// `true` between a confirmed press and its confirmed release.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Check the button once.
    ///
    /// Returns `true` only on the call that confirms a new press. Blocks for
    /// at most one settle window when the pin level differs from the
    /// debounced state.
    pub async fn pressed(&mut self) -> Result<bool, LinkError> {
        let low = self.read_low()?;
        match (low, self.held) {
            (true, false) => {
                if self.settles(true).await? {
                    self.held = true;
                    return Ok(true);
                }
                log::trace!("press rejected as bounce");
                Ok(false)
            }
            (false, true) => {
                if self.settles(false).await? {
                    self.held = false;
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    pub(crate) fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// `true` if the pin stays at the given level for the whole window.
    async fn settles(&mut self, low: bool) -> Result<bool, LinkError> {
        for _ in 0..self.config.samples {
            self.delay.delay_us(self.config.step_us).await;
            if self.read_low()? != low {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn read_low(&mut self) -> Result<bool, LinkError> {
        self.pin.is_low().map_err(|_| LinkError::Pin)
    }
}
