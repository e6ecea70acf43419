//! Hardware seams
//!
//! Two layers of traits:
//!
//! - Register level ([`AdcPeripheral`], [`UartPeripheral`]): the raw
//!   start/flag/data operations a microcontroller exposes. [`Sampler`] and
//!   [`Transmitter`] turn them into bounded, yielding waits.
//! - Bridge level ([`AnalogSource`], [`ByteSink`], [`PressSource`]): what the
//!   [`Bridge`] main loop needs. Boards with async HAL drivers can implement
//!   these directly.
//!
//! Buttons use `embedded_hal::digital::InputPin` and, for the edge path,
//! `embedded_hal_async::digital::Wait`.
//!
//! [`Sampler`]: crate::Sampler
//! [`Transmitter`]: crate::Transmitter
//! [`Bridge`]: crate::Bridge

use embedded_hal_async::delay::DelayNs;

use crate::config::PollConfig;
use crate::error::LinkError;
use crate::events::ButtonId;

/// Analog-to-digital converter wired to the knob channel.
pub trait AdcPeripheral {
    /// Kick off one conversion on the fixed channel.
    fn start_conversion(&mut self);

    /// `true` while the conversion started last is still running.
    fn conversion_busy(&mut self) -> bool;

    /// 8-bit result of the last finished conversion.
    fn read_result(&mut self) -> u8;
}

/// Serial transmitter with a single-byte buffer.
pub trait UartPeripheral {
    /// `true` when the transmit buffer can take another byte.
    fn transmit_buffer_empty(&mut self) -> bool;

    /// Load `byte` into the transmit buffer.
    ///
    /// Callers must only do this after observing an empty buffer.
    fn write_byte(&mut self, byte: u8);
}

/// One knob reading per call.
#[allow(async_fn_in_trait)]
pub trait AnalogSource {
    async fn sample(&mut self) -> Result<u8, LinkError>;
}

/// Puts one byte on the wire per call.
#[allow(async_fn_in_trait)]
pub trait ByteSink {
    async fn send_byte(&mut self, byte: u8) -> Result<(), LinkError>;
}

/// Where the main loop learns about button presses.
#[allow(async_fn_in_trait)]
pub trait PressSource {
    /// Next confirmed press, if any. Must not wait for one to happen.
    async fn poll_press(&mut self) -> Result<Option<ButtonId>, LinkError>;
}

/// Poll `ready` until it returns `true`, sleeping `config.step_us` between
/// reads. Returns `false` once `config.budget` sleeps have gone by.
pub(crate) async fn poll_until<D, F>(delay: &mut D, config: PollConfig, mut ready: F) -> bool
where
    D: DelayNs,
    F: FnMut() -> bool,
{
    let mut iterations = 0u32;
    loop {
        if ready() {
            return true;
        }
        if iterations >= config.budget {
            return false;
        }
        delay.delay_us(config.step_us).await;
        iterations += 1;
    }
}
