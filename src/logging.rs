//! `log` records printed over RTT.
//!
//! Format: `[millis] LEVEL target: message`.
use crate::*;

struct RttLogger;

static LOGGER: RttLogger = RttLogger;

impl log::Log for RttLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            rprintln!(
                "[{}] {} {}: {}",
                Instant::now().as_millis(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Set up the RTT channel and route `log` into it.
pub fn init(level: log::LevelFilter) {
    rtt_init_print!();
    if log::set_logger(&LOGGER).is_err() {
        rprintln!("logger already installed");
    }
    log::set_max_level(level);
}
