//! Buffered multi-sink logging for embedded targets.
//!
//! When developing on a microcontroller the output channel is often not
//! available from the first instruction: a UART needs clocks, a network
//! stack needs link-up, an SD card needs mounting. This crate buffers log
//! entries in a small fixed-capacity ring until at least one output sink
//! can take them, then formats each entry per sink (timestamp, severity
//! label, ANSI color) and hands the text to a caller-supplied destination.
//!
//! Design constraints:
//! - **No dynamic allocation.** Every buffer is a pre-sized array inside
//!   [`LogCore`]; the whole logger can live in a `static`.
//! - **Multiple independent sinks.** Each [`LogSink`] carries its own
//!   per-subsystem severity thresholds and formatting flags; all sinks
//!   consume the same buffered entries without duplicating storage.
//! - **At-least-one-success retirement.** A buffered entry is removed only
//!   once some sink has accepted it, so a broken transport never loses
//!   data that a working one could still deliver.
//!
//! ```
//! use ringlog::{LogCore, LogLevel, Subsystem};
//!
//! let serial = |text: &str| {
//!     // hand `text` to the transmit routine
//!     true
//! };
//!
//! let mut log = LogCore::new();
//! log.attach(0, &serial);
//! log.set_threshold(0, LogLevel::Info);
//! log.output(Subsystem::General, LogLevel::Info, "boot complete");
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod entry;
pub mod facade;
mod format;
pub mod level;
pub mod log_core;
mod macros;
pub mod sink;
pub mod subsystem;
pub mod time;

pub use entry::LogEntry;
pub use facade::StaticLog;
pub use level::LogLevel;
pub use log_core::LogCore;
pub use sink::{Destination, LogSink};
pub use subsystem::Subsystem;
pub use time::TimeSource;

#[cfg(test)]
mod tests;
