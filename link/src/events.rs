//! # Button Events
//!
//! Two ways for presses to reach the [`Bridge`](crate::Bridge):
//!
//! - **Edge driven**: one [`EdgeHandler`] per button waits for a falling edge,
//!   confirms the press through the debouncer and posts it into an
//!   [`EventQueue`]. The bridge drains the queue between samples. Handlers
//!   never touch the transmitter, so the bridge is the only writer on the
//!   wire.
//! - **Polled**: [`PolledButtons`] checks both debounced buttons once per
//!   bridge iteration.
//!
//! ## Queue
//!
//! [`EventQueue`] is a bounded [`Channel`] behind a raw mutex
//! (`CriticalSectionRawMutex` on the target). Posting never waits: when the
//! queue is full the press is dropped and counted.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

use crate::debounce::DebouncedButton;
use crate::error::LinkError;
use crate::hal::PressSource;

/// Which button produced an event. Not distinguished on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    A,
    B,
}

impl core::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonId::A => write!(f, "A"),
            ButtonId::B => write!(f, "B"),
        }
    }
}

/// Bounded queue of confirmed presses, edge handlers to bridge.
pub struct EventQueue<M: RawMutex, const N: usize> {
    channel: Channel<M, ButtonId, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> EventQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue a press. Returns `false` if the queue was full and the press
    /// was dropped.
    pub fn post(&self, button: ButtonId) -> bool {
        match self.channel.try_send(button) {
            Ok(()) => true,
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Oldest queued press, if any.
    pub fn take(&self) -> Option<ButtonId> {
        self.channel.try_receive().ok()
    }

    /// Presses lost to a full queue since boot.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<M: RawMutex, const N: usize> Default for EventQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> PressSource for &EventQueue<M, N> {
    async fn poll_press(&mut self) -> Result<Option<ButtonId>, LinkError> {
        Ok(self.take())
    }
}

/// Falling-edge handler for one button.
///
/// Each confirmed press is reported once; after that the handler waits for
/// a debounced release before it re-arms on the next falling edge.
pub struct EdgeHandler<P, D> {
    id: ButtonId,
    button: DebouncedButton<P, D>,
}

impl<P, D> EdgeHandler<P, D>
where
    P: InputPin + Wait,
    D: DelayNs,
{
    pub fn new(id: ButtonId, button: DebouncedButton<P, D>) -> Self {
        Self { id, button }
    }

    /// Wait for the next confirmed press.
    pub async fn next_press(&mut self) -> Result<ButtonId, LinkError> {
        let mut rejected = false;
        loop {
            if self.button.is_held() {
                self.button
                    .pin_mut()
                    .wait_for_high()
                    .await
                    .map_err(|_| LinkError::Pin)?;
                // Only clears `held` once the release has settled.
                self.button.pressed().await?;
                continue;
            }

            // After a rejected press the contact may already have settled
            // low, so there is no falling edge left to wait for.
            let pin = self.button.pin_mut();
            let armed = if rejected {
                pin.wait_for_low().await
            } else {
                pin.wait_for_falling_edge().await
            };
            armed.map_err(|_| LinkError::Pin)?;

            if self.button.pressed().await? {
                return Ok(self.id);
            }
            rejected = true;
        }
    }

    /// Wait for one press and post it into `queue`.
    ///
    /// Returns `false` when the queue was full and the press was dropped.
    pub async fn forward<M: RawMutex, const N: usize>(
        &mut self,
        queue: &EventQueue<M, N>,
    ) -> Result<bool, LinkError> {
        let id = self.next_press().await?;
        let posted = queue.post(id);
        if posted {
            log::debug!("button {} pressed", id);
        } else {
            log::warn!("event queue full, dropped press on button {}", id);
        }
        Ok(posted)
    }

    /// Post every press into `queue`, forever.
    pub async fn run<M: RawMutex, const N: usize>(&mut self, queue: &EventQueue<M, N>) -> ! {
        loop {
            if let Err(err) = self.forward(queue).await {
                log::warn!("button {}: {}", self.id, err);
            }
        }
    }
}

/// Both buttons polled in place, A before B.
pub struct PolledButtons<A, B> {
    a: A,
    b: B,
}

impl<A, B> PolledButtons<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<PA, DA, PB, DB> PressSource for PolledButtons<DebouncedButton<PA, DA>, DebouncedButton<PB, DB>>
where
    PA: InputPin,
    DA: DelayNs,
    PB: InputPin,
    DB: DelayNs,
{
    async fn poll_press(&mut self) -> Result<Option<ButtonId>, LinkError> {
        if self.a.pressed().await? {
            return Ok(Some(ButtonId::A));
        }
        if self.b.pressed().await? {
            return Ok(Some(ButtonId::B));
        }
        Ok(None)
    }
}
