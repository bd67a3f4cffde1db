//! Adapter publishing a [`LogCore`] through the `log` crate facade.
//!
//! Firmware that mixes this crate with libraries speaking the standard
//! `log` macros can route everything through one core. The caller owns
//! the static, configures it, and installs it; nothing here is implicit:
//!
//! ```no_run
//! use ringlog::{LogLevel, StaticLog};
//!
//! fn over_serial(text: &str) -> bool {
//!     true
//! }
//!
//! static SERIAL: fn(&str) -> bool = over_serial;
//! static LOG: StaticLog = StaticLog::new();
//!
//! LOG.with(|core| {
//!     core.attach(0, &SERIAL);
//!     core.set_threshold(0, LogLevel::Info);
//! });
//! LOG.install().expect("no other logger installed");
//!
//! log::warn!("supply voltage low");
//! ```

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use spin::Mutex;

use crate::level::LogLevel;
use crate::log_core::LogCore;
use crate::subsystem::Subsystem;

/// A [`LogCore`] behind a spin lock, implementing [`log::Log`].
///
/// Records are mapped onto the core's vocabulary: `Error`/`Warn`/`Info`
/// keep their level, `Debug` and `Trace` both become
/// [`LogLevel::Debug`], and the record target selects the subsystem when
/// it matches a [`Subsystem`] name (anything else lands in
/// [`Subsystem::General`]). Each record is buffered and flushed
/// immediately; `log::logger().flush()` drains whatever earlier writes
/// left behind.
pub struct StaticLog {
    core: Mutex<LogCore<'static>>,
}

// Safety: the target runs a single cooperative thread, and every path to
// the inner core and its destinations goes through the mutex.
unsafe impl Send for StaticLog {}
unsafe impl Sync for StaticLog {}

impl StaticLog {
    /// An empty, uninstalled logger; `const`, so it can be a `static`.
    pub const fn new() -> Self {
        Self {
            core: Mutex::new(LogCore::new()),
        }
    }

    /// Runs `configure` with exclusive access to the inner core, for
    /// attaching destinations and setting thresholds.
    pub fn with<R>(&self, configure: impl FnOnce(&mut LogCore<'static>) -> R) -> R {
        configure(&mut self.core.lock())
    }

    /// Registers this logger with the `log` crate and opens the facade's
    /// own level filter all the way; filtering is the core's job.
    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl Default for StaticLog {
    fn default() -> Self {
        Self::new()
    }
}

const fn level_of(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warning,
        Level::Info => LogLevel::Info,
        Level::Debug | Level::Trace => LogLevel::Debug,
    }
}

fn subsystem_of(target: &str) -> Subsystem {
    Subsystem::from_name(target).unwrap_or(Subsystem::General)
}

impl log::Log for StaticLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.core
            .lock()
            .accepts(subsystem_of(metadata.target()), level_of(metadata.level()))
    }

    fn log(&self, record: &Record) {
        self.core.lock().log_fmt(
            subsystem_of(record.target()),
            level_of(record.level()),
            *record.args(),
        );
    }

    fn flush(&self) {
        self.core.lock().flush();
    }
}
