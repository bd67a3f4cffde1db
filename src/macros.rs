//! Per-level logging macros.
//!
//! Each macro takes the logger explicitly (there is no ambient global),
//! followed by the subsystem and a format string:
//!
//! ```
//! use ringlog::{LogCore, LogLevel, Subsystem};
//!
//! let serial = |text: &str| true;
//! let mut log = LogCore::new();
//! log.attach(0, &serial);
//! log.set_threshold(0, LogLevel::Debug);
//!
//! ringlog::log_info!(&mut log, Subsystem::General, "cell voltage {} mV", 3712);
//! ```
//!
//! The format arguments are only evaluated when some sink accepts the
//! message, so logging below every threshold is essentially free.

/// Internal implementation macro with level filtering.
///
/// Checks the thresholds before expanding the format arguments, so
/// filtered messages never pay for formatting.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_fmt_filtered {
    ($log:expr, $subsystem:expr, $level:expr, $($arg:tt)*) => {{
        let core = $log;
        let subsystem = $subsystem;
        let level = $level;
        if core.accepts(subsystem, level) {
            core.log_fmt(subsystem, level, format_args!($($arg)*));
        }
    }};
}

/// Logs and flushes a message at the [`Critical`](crate::LogLevel::Critical) level.
#[macro_export]
macro_rules! log_crit {
    ($log:expr, $subsystem:expr, $($arg:tt)*) => {
        $crate::__log_fmt_filtered!($log, $subsystem, $crate::LogLevel::Critical, $($arg)*)
    };
}

/// Logs and flushes a message at the [`Error`](crate::LogLevel::Error) level.
#[macro_export]
macro_rules! log_err {
    ($log:expr, $subsystem:expr, $($arg:tt)*) => {
        $crate::__log_fmt_filtered!($log, $subsystem, $crate::LogLevel::Error, $($arg)*)
    };
}

/// Logs and flushes a message at the [`Warning`](crate::LogLevel::Warning) level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $subsystem:expr, $($arg:tt)*) => {
        $crate::__log_fmt_filtered!($log, $subsystem, $crate::LogLevel::Warning, $($arg)*)
    };
}

/// Logs and flushes a message at the [`Info`](crate::LogLevel::Info) level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $subsystem:expr, $($arg:tt)*) => {
        $crate::__log_fmt_filtered!($log, $subsystem, $crate::LogLevel::Info, $($arg)*)
    };
}

/// Logs and flushes a message at the [`Debug`](crate::LogLevel::Debug) level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $subsystem:expr, $($arg:tt)*) => {
        $crate::__log_fmt_filtered!($log, $subsystem, $crate::LogLevel::Debug, $($arg)*)
    };
}
