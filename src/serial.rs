//! Serial link to the PC over UARTE0, routed through the interface chip to
//! the USB serial port.
//!
//! One byte per write. The UARTE raises its end-of-transmit interrupt when
//! the byte has left; the wait is bounded by a timeout.
use crate::*;

pub type Uart = uarte::UarteTx<'static, peripherals::UARTE0>;

pub struct Serial {
    uart: Uart,
    timeout: Duration,
}

impl Serial {
    pub fn new(uart: Uart, timeout: Duration) -> Self {
        Self { uart, timeout }
    }
}

impl ByteSink for Serial {
    async fn send_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        // EasyDMA reads from RAM, so the byte goes through a stack buffer.
        let buf = [byte];
        match with_timeout(self.timeout, self.uart.write(&buf)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err(LinkError::Uart),
            Err(_) => Err(LinkError::TxTimeout),
        }
    }
}
