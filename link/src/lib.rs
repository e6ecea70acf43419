//! # Controller Link
//!
//! Hardware-independent core of the game controller: a potentiometer knob and
//! two push buttons streamed to a PC over a one-way serial byte link.
//!
//! ```text
//! knob ──▶ AnalogSource ─┐
//!                        ├──▶ Bridge ──▶ ByteSink ──▶ wire
//! buttons ─▶ EdgeHandler ─▶ EventQueue ─┘
//! ```
//!
//! ## Wire format
//!
//! Every frame is one byte. [`SENTINEL`] (`255`) means "a button was pressed";
//! any other value is the latest knob reading. Readings that would collide
//! with the sentinel are resolved by [`SentinelPolicy`].
//!
//! ## Waiting on hardware
//!
//! The register-level drivers ([`Sampler`], [`Transmitter`]) and the debounced
//! button never spin forever: every wait is a bounded poll that yields through
//! an async delay and ends in a [`LinkError`] when its budget runs out.

#![cfg_attr(not(test), no_std)]

pub mod bridge;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod hal;
pub mod protocol;
pub mod sampler;
pub mod transmitter;

pub use bridge::{Bridge, LinkStats};
pub use config::{BridgeConfig, DebounceConfig, PollConfig};
pub use debounce::DebouncedButton;
pub use error::LinkError;
pub use events::{ButtonId, EdgeHandler, EventQueue, PolledButtons};
pub use hal::{AdcPeripheral, AnalogSource, ByteSink, PressSource, UartPeripheral};
pub use protocol::{Frame, SentinelPolicy, SENTINEL};
pub use sampler::Sampler;
pub use transmitter::Transmitter;
