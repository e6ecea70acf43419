//! # Wire Protocol
//!
//! The link is a unidirectional stream of single-byte frames:
//!
//! | byte      | meaning                               |
//! |-----------|---------------------------------------|
//! | `255`     | a button was pressed (either button)  |
//! | `0..=254` | current knob reading                  |
//!
//! A knob reading of exactly `255` cannot be sent as-is, since the receiver
//! would see a button press. [`SentinelPolicy`] decides what happens to it.

/// Reserved byte announcing a button event.
pub const SENTINEL: u8 = u8::MAX;

/// A single frame on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// A confirmed button press.
    Event,
    /// A knob reading. Never equal to [`SENTINEL`] when produced by
    /// [`SentinelPolicy::encode`].
    Sample(u8),
}

impl Frame {
    /// Byte to put on the wire for this frame.
    pub const fn to_byte(self) -> u8 {
        match self {
            Frame::Event => SENTINEL,
            Frame::Sample(value) => value,
        }
    }

    /// Interpret a received byte, as the PC side does.
    pub const fn from_byte(byte: u8) -> Self {
        if byte == SENTINEL {
            Frame::Event
        } else {
            Frame::Sample(byte)
        }
    }
}

/// How a knob reading equal to [`SENTINEL`] is put on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SentinelPolicy {
    /// Send `254` instead. The top code is reserved for events, so full
    /// scale reads as `254`.
    #[default]
    Clamp,
    /// Send nothing for that iteration.
    Suppress,
}

impl SentinelPolicy {
    /// Encode a knob reading, or `None` if it must not be sent.
    pub const fn encode(self, sample: u8) -> Option<u8> {
        if sample != SENTINEL {
            return Some(sample);
        }
        match self {
            SentinelPolicy::Clamp => Some(SENTINEL - 1),
            SentinelPolicy::Suppress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_readings_pass_through() {
        for value in [0u8, 1, 10, 128, 253, 254] {
            assert_eq!(SentinelPolicy::Clamp.encode(value), Some(value));
            assert_eq!(SentinelPolicy::Suppress.encode(value), Some(value));
        }
    }

    #[test]
    fn full_scale_never_looks_like_an_event() {
        assert_eq!(SentinelPolicy::Clamp.encode(255), Some(254));
        assert_eq!(SentinelPolicy::Suppress.encode(255), None);
    }

    #[test]
    fn frames_map_to_bytes() {
        assert_eq!(Frame::Event.to_byte(), 255);
        assert_eq!(Frame::Sample(10).to_byte(), 10);
        assert_eq!(Frame::from_byte(255), Frame::Event);
        assert_eq!(Frame::from_byte(128), Frame::Sample(128));
    }

    #[test]
    fn default_policy_clamps() {
        assert_eq!(SentinelPolicy::default(), SentinelPolicy::Clamp);
    }
}
