//! # Event Bridge
//!
//! The main loop of the controller. Each iteration:
//!
//! 1. Samples the knob.
//! 2. If a button press is pending, sends [`SENTINEL`].
//! 3. Otherwise sends the reading, encoded through the configured
//!    [`SentinelPolicy`](crate::SentinelPolicy) (which may suppress it).
//!
//! The bridge owns the [`ByteSink`] outright. Presses arrive through a
//! [`PressSource`], so nothing else ever writes to the wire and bytes cannot
//! interleave.
//!
//! ## Faults
//!
//! A timed-out sample or write ends the iteration with a [`LinkError`].
//! [`Bridge::run`] logs it, counts it and carries on with the next
//! iteration. A press whose sentinel could not be sent stays pending and is
//! retried first on the next iteration.

use crate::config::BridgeConfig;
use crate::error::LinkError;
use crate::events::ButtonId;
use crate::hal::{AnalogSource, ByteSink, PressSource};
use crate::protocol::{Frame, SENTINEL};

/// Counters since boot. All wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Knob readings put on the wire.
    pub samples: u32,
    /// Sentinels put on the wire.
    pub events: u32,
    /// Readings withheld by the sentinel policy.
    pub suppressed: u32,
    /// Iterations that ended in a [`LinkError`].
    pub faults: u32,
}

impl core::fmt::Display for LinkStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "samples: {}, events: {}, suppressed: {}, faults: {}",
            self.samples, self.events, self.suppressed, self.faults
        )
    }
}

/// Knob and button state to serial bytes.
pub struct Bridge<A, T, S> {
    analog: A,
    sink: T,
    presses: S,
    config: BridgeConfig,
    /// Press taken from `presses` whose sentinel is not on the wire yet.
    pending: Option<ButtonId>,
    stats: LinkStats,
}

impl<A, T, S> Bridge<A, T, S>
where
    A: AnalogSource,
    T: ByteSink,
    S: PressSource,
{
    pub fn new(analog: A, sink: T, presses: S, config: BridgeConfig) -> Self {
        Self {
            analog,
            sink,
            presses,
            config,
            pending: None,
            stats: LinkStats::default(),
        }
    }

    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Run one iteration of the main loop.
    ///
    /// Returns the frame that went out, or `None` when the reading was
    /// suppressed. Errors are counted in [`LinkStats::faults`].
    pub async fn step(&mut self) -> Result<Option<Frame>, LinkError> {
        let result = self.transfer().await;
        if result.is_err() {
            self.stats.faults = self.stats.faults.wrapping_add(1);
        }
        result
    }

    async fn transfer(&mut self) -> Result<Option<Frame>, LinkError> {
        let sampled = self.analog.sample().await;

        if self.pending.is_none() {
            self.pending = self.presses.poll_press().await?;
        }
        if let Some(button) = self.pending {
            // A pending press goes out even when the ADC failed; the reading
            // is dropped on this path either way.
            if let Err(err) = sampled {
                self.stats.faults = self.stats.faults.wrapping_add(1);
                log::warn!("link fault: {}", err);
            }
            self.sink.send_byte(SENTINEL).await?;
            self.pending = None;
            self.stats.events = self.stats.events.wrapping_add(1);
            log::debug!("sent event for button {}", button);
            return Ok(Some(Frame::Event));
        }

        let data = sampled?;
        let Some(byte) = self.config.sentinel_policy.encode(data) else {
            self.stats.suppressed = self.stats.suppressed.wrapping_add(1);
            log::trace!("reading {} withheld", data);
            return Ok(None);
        };
        self.sink.send_byte(byte).await?;
        self.stats.samples = self.stats.samples.wrapping_add(1);
        Ok(Some(Frame::Sample(byte)))
    }

    /// Loop forever. Faults are logged, never fatal.
    pub async fn run(&mut self) -> ! {
        let mut iterations = 0u32;
        loop {
            if let Err(err) = self.step().await {
                log::warn!("link fault: {}", err);
            }

            iterations = iterations.wrapping_add(1);
            if self.config.report_every != 0 && iterations % self.config.report_every == 0 {
                log::info!("{}", self.stats);
            }
        }
    }
}
