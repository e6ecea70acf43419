//! Scripted stand-ins for the hardware.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use controller_link::{
    AdcPeripheral, AnalogSource, ButtonId, ByteSink, LinkError, PressSource, UartPeripheral,
};
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

pub const L: bool = true;
pub const H: bool = false;

/// Button pin replaying a timeline of levels (`true` = low). Every read
/// consumes one step; the last level repeats once the script runs out.
/// Edge waits skip ahead to the matching step and panic if there is none.
pub struct ScriptPin {
    levels: Vec<bool>,
    pos: usize,
}

impl ScriptPin {
    pub fn new(levels: &[bool]) -> Self {
        assert!(!levels.is_empty());
        Self {
            levels: levels.to_vec(),
            pos: 0,
        }
    }

    fn seek(&mut self, what: &str, found: impl Fn(&[bool], usize) -> bool) {
        let start = self.pos;
        match (start..self.levels.len()).find(|&i| found(&self.levels, i)) {
            Some(i) => self.pos = i,
            None => panic!("script has no {what} after step {start}"),
        }
    }
}

impl ErrorType for ScriptPin {
    type Error = Infallible;
}

impl InputPin for ScriptPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        let idx = self.pos.min(self.levels.len() - 1);
        self.pos += 1;
        Ok(self.levels[idx])
    }
}

impl Wait for ScriptPin {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        self.seek("high level", |levels, i| !levels[i]);
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        self.seek("low level", |levels, i| levels[i]);
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        self.seek("rising edge", |levels, i| i > 0 && levels[i - 1] && !levels[i]);
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        self.seek("falling edge", |levels, i| i > 0 && !levels[i - 1] && levels[i]);
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        self.seek("edge", |levels, i| i > 0 && levels[i - 1] != levels[i]);
        Ok(())
    }
}

/// Delay that returns at once and remembers how long it should have taken.
#[derive(Default)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

/// ADC reporting busy for `busy_reads` flag reads after each start.
#[derive(Default)]
pub struct MockAdc {
    pub value: u8,
    pub busy_reads: u32,
    pub stuck: bool,
    pub conversions: u32,
    remaining: u32,
}

impl MockAdc {
    pub fn reading(value: u8, busy_reads: u32) -> Self {
        Self {
            value,
            busy_reads,
            ..Self::default()
        }
    }

    /// Conversion that never finishes.
    pub fn stuck() -> Self {
        Self {
            stuck: true,
            ..Self::default()
        }
    }
}

impl AdcPeripheral for MockAdc {
    fn start_conversion(&mut self) {
        self.conversions += 1;
        self.remaining = self.busy_reads;
    }

    fn conversion_busy(&mut self) -> bool {
        if self.stuck {
            return true;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return true;
        }
        false
    }

    fn read_result(&mut self) -> u8 {
        self.value
    }
}

/// UART whose buffer stays full for `drain_polls` flag reads after a write.
/// Any write issued while the buffer is full is counted as a violation.
#[derive(Default)]
pub struct MockUart {
    pub sent: Vec<u8>,
    pub drain_polls: u32,
    pub stuck: bool,
    pub violations: u32,
    busy_left: u32,
}

impl MockUart {
    pub fn new(drain_polls: u32) -> Self {
        Self {
            drain_polls,
            ..Self::default()
        }
    }

    /// Transmit buffer that never drains.
    pub fn stuck() -> Self {
        Self {
            stuck: true,
            ..Self::default()
        }
    }
}

impl UartPeripheral for MockUart {
    fn transmit_buffer_empty(&mut self) -> bool {
        if self.stuck {
            return false;
        }
        if self.busy_left > 0 {
            self.busy_left -= 1;
            return false;
        }
        true
    }

    fn write_byte(&mut self, byte: u8) {
        if self.stuck || self.busy_left > 0 {
            self.violations += 1;
        }
        self.sent.push(byte);
        self.busy_left = self.drain_polls;
    }
}

/// Knob replaying scripted results, then repeating the last good reading.
pub struct Knob {
    script: VecDeque<Result<u8, LinkError>>,
    last: u8,
}

impl Knob {
    pub fn steady(value: u8) -> Self {
        Self {
            script: VecDeque::new(),
            last: value,
        }
    }

    pub fn script(results: &[Result<u8, LinkError>]) -> Self {
        Self {
            script: results.iter().copied().collect(),
            last: 0,
        }
    }
}

impl AnalogSource for Knob {
    async fn sample(&mut self) -> Result<u8, LinkError> {
        match self.script.pop_front() {
            Some(result) => {
                if let Ok(value) = result {
                    self.last = value;
                }
                result
            }
            None => Ok(self.last),
        }
    }
}

/// Byte sink shared with the test so the output can be inspected while the
/// bridge still owns it.
#[derive(Clone, Default)]
pub struct Wire {
    bytes: Rc<RefCell<Vec<u8>>>,
    failures: Rc<Cell<u32>>,
}

impl Wire {
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Make the next `count` sends time out.
    pub fn fail_next(&self, count: u32) {
        self.failures.set(count);
    }
}

impl ByteSink for Wire {
    async fn send_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        let failures = self.failures.get();
        if failures > 0 {
            self.failures.set(failures - 1);
            return Err(LinkError::TxTimeout);
        }
        self.bytes.borrow_mut().push(byte);
        Ok(())
    }
}

/// Press source replaying one entry per poll, then nothing.
pub struct Presses(VecDeque<Option<ButtonId>>);

impl Presses {
    pub fn none() -> Self {
        Self(VecDeque::new())
    }

    pub fn script(polls: &[Option<ButtonId>]) -> Self {
        Self(polls.iter().copied().collect())
    }
}

impl PressSource for Presses {
    async fn poll_press(&mut self) -> Result<Option<ButtonId>, LinkError> {
        Ok(self.0.pop_front().flatten())
    }
}
