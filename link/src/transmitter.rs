//! Serial transmitter.
//!
//! The single point every outgoing byte goes through: wait for the transmit
//! buffer to drain, then load the next byte. A write is never issued while
//! the buffer-empty flag reads false.

use embedded_hal_async::delay::DelayNs;

use crate::config::PollConfig;
use crate::error::LinkError;
use crate::hal::{poll_until, ByteSink, UartPeripheral};

/// Bounded-wait driver over a [`UartPeripheral`].
pub struct Transmitter<U, D> {
    uart: U,
    delay: D,
    poll: PollConfig,
}

impl<U, D> Transmitter<U, D>
where
    U: UartPeripheral,
    D: DelayNs,
{
    pub fn new(uart: U, delay: D, poll: PollConfig) -> Self {
        Self { uart, delay, poll }
    }

    pub fn release(self) -> (U, D) {
        (self.uart, self.delay)
    }
}

impl<U, D> ByteSink for Transmitter<U, D>
where
    U: UartPeripheral,
    D: DelayNs,
{
    async fn send_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        let uart = &mut self.uart;
        if !poll_until(&mut self.delay, self.poll, || uart.transmit_buffer_empty()).await {
            log::warn!(
                "transmit buffer still full after {} us, dropping {:#04x}",
                self.poll.timeout_us(),
                byte
            );
            return Err(LinkError::TxTimeout);
        }

        self.uart.write_byte(byte);
        Ok(())
    }
}
