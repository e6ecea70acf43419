//! Error type for the link
//!
//! Every wait on hardware in this crate is bounded, so a stuck peripheral
//! shows up as one of these values instead of a hung device.

/// Errors that can occur while sampling, debouncing or transmitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// The ADC kept reporting "conversion busy" past the poll budget.
    AdcTimeout,
    /// The transmit buffer never reported empty within the poll budget.
    TxTimeout,
    /// Reading a button pin failed.
    Pin,
    /// The serial driver rejected the write.
    Uart,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinkError::AdcTimeout => write!(f, "Timeout waiting for ADC conversion"),
            LinkError::TxTimeout => write!(f, "Timeout waiting for transmit buffer"),
            LinkError::Pin => write!(f, "Button pin read failed"),
            LinkError::Uart => write!(f, "Serial write failed"),
        }
    }
}

impl core::error::Error for LinkError {}
