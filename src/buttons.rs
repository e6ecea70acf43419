//! # Button Module
//!
//! Buttons A and B are active-low with pull-ups. Each one gets an
//! [`EdgeHandler`] that sleeps on a GPIOTE falling-edge interrupt, confirms
//! the press over a settle window and posts it into [`Events`] for the main
//! loop. Handlers never write to the serial port themselves.
use crate::*;

/// Settle window for the micro:bit's tactile switches.
pub const DEBOUNCE: DebounceConfig = DebounceConfig {
    step_us: 1_000,
    samples: 5,
};

pub type ButtonIrq = EdgeHandler<Button, Delay>;

/// Falling-edge handler for one board button.
pub fn edge_handler(id: ButtonId, button: Button) -> ButtonIrq {
    EdgeHandler::new(id, DebouncedButton::new(button, Delay, DEBOUNCE))
}
