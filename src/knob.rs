//! # Knob Input Module
//!
//! Potentiometer on edge connector pin P2, read through the nRF52's SAADC
//! (Successive Approximation ADC) peripheral.
//!
//! The knob feeds the main loop one 8-bit reading per iteration. The SAADC
//! signals the end of a conversion by interrupt; the wait for it is bounded
//! by a timeout so a wedged ADC surfaces as [`LinkError::AdcTimeout`].
use crate::*;

/// Type alias for a single-channel SAADC configuration.
pub type Adc = saadc::Saadc<'static, 1>;

/// Raw 14-bit reading at the knob's full travel.
const FULL_SCALE: f32 = 10_000.0;

/// Analog knob that produces 8-bit readings.
pub struct Knob {
    adc: Adc,
    timeout: Duration,
}

impl Knob {
    /// Creates a new knob and calibrates the ADC.
    ///
    /// # Arguments
    ///
    /// * `adc` - Configured SAADC peripheral
    /// * `timeout` - Longest wait for one conversion
    pub async fn new(adc: Adc, timeout: Duration) -> Self {
        adc.calibrate().await;
        Self { adc, timeout }
    }

    /// Maps a raw reading onto `0..=255`.
    ///
    /// Negative readings (noise around ground) map to 0, anything at or past
    /// [`FULL_SCALE`] to 255.
    fn quantize(raw: i16) -> u8 {
        let raw = raw.clamp(0, 0x7fff) as u16;
        let scaled = raw as f32 / FULL_SCALE;
        (256.0 * scaled).clamp(0.0, 255.0).floor() as u8
    }
}

impl AnalogSource for Knob {
    async fn sample(&mut self) -> Result<u8, LinkError> {
        let mut buf = [0];
        with_timeout(self.timeout, self.adc.sample(&mut buf))
            .await
            .map_err(|_| LinkError::AdcTimeout)?;
        Ok(Self::quantize(buf[0]))
    }
}
