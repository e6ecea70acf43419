//! Compile-time tuning for the link.
//!
//! All waits are expressed as a poll step and a count of steps, so a budget
//! reads the same whatever delay provider runs underneath.

use crate::protocol::SentinelPolicy;

/// Settle window used to confirm a press or a release.
///
/// The pin must hold its new level for `samples` consecutive reads, taken
/// `step_us` apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceConfig {
    pub step_us: u32,
    pub samples: u16,
}

impl DebounceConfig {
    pub const DEFAULT: Self = Self {
        step_us: 500,
        samples: 10,
    };

    /// Length of the whole settle window.
    pub const fn window_us(&self) -> u32 {
        self.step_us * self.samples as u32
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bounded poll of a hardware-ready flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between two reads of the flag.
    pub step_us: u32,
    /// Number of delays allowed before giving up.
    pub budget: u32,
}

impl PollConfig {
    /// A conversion takes microseconds; 5 ms means the ADC is wedged.
    pub const ADC: Self = Self {
        step_us: 10,
        budget: 500,
    };

    /// One byte at 9600 baud takes about 1 ms on the wire.
    pub const UART: Self = Self {
        step_us: 100,
        budget: 200,
    };

    pub const fn timeout_us(&self) -> u32 {
        self.step_us * self.budget
    }
}

/// Main loop behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    pub sentinel_policy: SentinelPolicy,
    /// Log [`LinkStats`](crate::LinkStats) every this many iterations; `0`
    /// disables the report.
    pub report_every: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            sentinel_policy: SentinelPolicy::default(),
            report_every: 0,
        }
    }
}
