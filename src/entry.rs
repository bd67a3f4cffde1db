//! One buffered log entry.

use core::fmt::Write;

use crate::config::{MAX_MESSAGE_LENGTH, TIMESTAMP_LENGTH};
use crate::format::BoundedWriter;
use crate::level::LogLevel;
use crate::subsystem::Subsystem;
use crate::time::TimeSource;

/// A fixed-capacity record holding one message while it waits for a sink.
///
/// The message and timestamp are stored as raw bytes plus a length;
/// anything beyond the capacity is truncated at a character boundary when
/// the entry is filled, so the accessors can always hand back valid
/// `&str` slices.
pub struct LogEntry {
    subsystem: Subsystem,
    level: LogLevel,
    timestamp: [u8; TIMESTAMP_LENGTH],
    timestamp_length: usize,
    message: [u8; MAX_MESSAGE_LENGTH],
    message_length: usize,
}

impl LogEntry {
    pub(crate) const fn empty() -> Self {
        Self {
            subsystem: Subsystem::General,
            level: LogLevel::None,
            timestamp: [0; TIMESTAMP_LENGTH],
            timestamp_length: 0,
            message: [0; MAX_MESSAGE_LENGTH],
            message_length: 0,
        }
    }

    /// Reinitializes a ring slot for a new entry, clearing the previous
    /// occupant's text.
    pub(crate) fn stamp(&mut self, subsystem: Subsystem, level: LogLevel) {
        self.subsystem = subsystem;
        self.level = level;
        self.timestamp_length = 0;
        self.message_length = 0;
    }

    /// Copies `text` into the entry, truncating to the message capacity.
    pub(crate) fn set_message(&mut self, text: &str) {
        let mut writer = BoundedWriter::new(&mut self.message);
        let _ = writer.write_str(text);
        self.message_length = writer.written();
    }

    /// Asks `source` for a timestamp. A source reporting failure leaves
    /// the field empty rather than half-written.
    pub(crate) fn render_timestamp(&mut self, source: &dyn TimeSource) {
        let mut writer = BoundedWriter::new(&mut self.timestamp);
        if source.write_timestamp(&mut writer) {
            self.timestamp_length = writer.written();
        } else {
            self.timestamp_length = 0;
        }
    }

    /// The buffered message text.
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.message[..self.message_length]).unwrap_or("")
    }

    /// The rendered timestamp, empty when no time source produced one.
    pub fn timestamp(&self) -> &str {
        core::str::from_utf8(&self.timestamp[..self.timestamp_length]).unwrap_or("")
    }

    /// Severity this entry was logged at.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Subsystem this entry was logged under.
    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }
}
