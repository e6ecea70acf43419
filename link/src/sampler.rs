//! # Analog Sampler
//!
//! Register-level knob reader. One call to [`AnalogSource::sample`] starts a
//! single conversion on the fixed channel, waits for the busy flag to clear
//! and returns the raw 8-bit result. No averaging, no oversampling: every
//! call is an independent snapshot.
//!
//! The wait is bounded by [`PollConfig`]; an ADC that never finishes yields
//! [`LinkError::AdcTimeout`].

use embedded_hal_async::delay::DelayNs;

use crate::config::PollConfig;
use crate::error::LinkError;
use crate::hal::{poll_until, AdcPeripheral, AnalogSource};

/// Bounded-wait driver over an [`AdcPeripheral`].
pub struct Sampler<A, D> {
    adc: A,
    delay: D,
    poll: PollConfig,
}

impl<A, D> Sampler<A, D>
where
    A: AdcPeripheral,
    D: DelayNs,
{
    pub fn new(adc: A, delay: D, poll: PollConfig) -> Self {
        Self { adc, delay, poll }
    }

    /// Give the peripheral and delay back.
    pub fn release(self) -> (A, D) {
        (self.adc, self.delay)
    }
}

impl<A, D> AnalogSource for Sampler<A, D>
where
    A: AdcPeripheral,
    D: DelayNs,
{
    async fn sample(&mut self) -> Result<u8, LinkError> {
        self.adc.start_conversion();

        let adc = &mut self.adc;
        if !poll_until(&mut self.delay, self.poll, || !adc.conversion_busy()).await {
            log::warn!("ADC still busy after {} us", self.poll.timeout_us());
            return Err(LinkError::AdcTimeout);
        }

        let value = self.adc.read_result();
        log::trace!("ADC sample {}", value);
        Ok(value)
    }
}
