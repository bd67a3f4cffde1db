//! The logging engine.
//!
//! [`LogCore`] owns everything: a fixed array of sinks, the ring buffer of
//! buffered entries, the shared formatting scratch and the optional time
//! source. It is a plain value with explicit construction: create one,
//! configure its sinks, and pass it by reference to whoever produces log
//! entries. On a single-threaded target it can live in a `static`; see
//! [`crate::facade`] for the shared variant.

use core::fmt::{self, Write};

use crate::config::{
    BUFFER_LENGTH, COLOR_RESET_LENGTH, MAX_MESSAGE_LENGTH, MAX_SINKS, NEWLINE_LENGTH,
};
use crate::entry::LogEntry;
use crate::format::{BoundedWriter, FormatBuffer};
use crate::level::LogLevel;
use crate::sink::{Destination, LogSink};
use crate::subsystem::Subsystem;
use crate::time::TimeSource;

/// Core logging system: ring buffer, sinks and per-sink formatting.
///
/// # Buffering and retirement
///
/// [`log`](LogCore::log) only buffers; [`flush`](LogCore::flush) formats
/// the oldest entry once per sink that wants it and retires the entry as
/// soon as at least one destination reports success. Entries no sink
/// could deliver stay buffered for the next flush; once the ring is full,
/// each further accepted entry overwrites the oldest one.
///
/// # Concurrency
///
/// Single-threaded: no internal locking, no reentrancy. Calling
/// into one `LogCore` from an interrupt handler concurrently with the
/// main flush path needs external mutual exclusion.
///
/// ```
/// use ringlog::{LogCore, LogLevel, Subsystem};
///
/// let serial = |text: &str| {
///     // hand `text` to the transport
///     true
/// };
///
/// let mut log = LogCore::new();
/// log.attach(0, &serial);
/// log.set_threshold(0, LogLevel::Warning);
///
/// log.log(Subsystem::Machine, LogLevel::Warning, "motor stalled");
/// log.flush();
/// ```
pub struct LogCore<'d> {
    sinks: [LogSink<'d>; MAX_SINKS],
    items: [LogEntry; BUFFER_LENGTH],
    /// Index of the oldest unretired entry.
    head: usize,
    /// Filling level of the ring, `0..=BUFFER_LENGTH`.
    level: usize,
    /// Entries overwritten before any sink accepted them.
    dropped: usize,
    /// Shared scratch the formatted text for each sink is assembled in.
    contents: FormatBuffer,
    time_source: Option<&'d dyn TimeSource>,
}

impl<'d> LogCore<'d> {
    /// Creates an empty core: all sinks inert, ring empty, no time source.
    ///
    /// `const`, so a core can be baked into a `static`.
    pub const fn new() -> Self {
        const EMPTY: LogEntry = LogEntry::empty();
        Self {
            sinks: [LogSink::inert(); MAX_SINKS],
            items: [EMPTY; BUFFER_LENGTH],
            head: 0,
            level: 0,
            dropped: 0,
            contents: FormatBuffer::new(),
            time_source: None,
        }
    }

    // ------------------------------
    // configuration
    // ------------------------------

    /// Sets the function providing timestamp text for new entries.
    pub fn set_time_source(&mut self, source: &'d dyn TimeSource) {
        self.time_source = Some(source);
    }

    /// Removes the time source; new entries get empty timestamps.
    pub fn clear_time_source(&mut self) {
        self.time_source = None;
    }

    /// Whether a time source is configured.
    pub fn has_time_source(&self) -> bool {
        self.time_source.is_some()
    }

    /// Attaches a destination to sink `index`. Out-of-range indices are
    /// ignored.
    pub fn attach(&mut self, index: usize, destination: &'d dyn Destination) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.attach(destination);
        }
    }

    /// Detaches sink `index`'s destination.
    pub fn detach(&mut self, index: usize) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.detach();
        }
    }

    /// Whether sink `index` has a destination; `false` for out-of-range
    /// indices.
    pub fn is_active(&self, index: usize) -> bool {
        match self.sinks.get(index) {
            Some(sink) => sink.is_active(),
            None => false,
        }
    }

    /// Sets sink `index`'s threshold for every subsystem.
    pub fn set_threshold(&mut self, index: usize, level: LogLevel) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.set_threshold(level);
        }
    }

    /// Overrides sink `index`'s threshold for one subsystem.
    pub fn set_subsystem_threshold(
        &mut self,
        index: usize,
        subsystem: Subsystem,
        level: LogLevel,
    ) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.set_subsystem_threshold(subsystem, level);
        }
    }

    /// Sink `index`'s threshold for `subsystem`; [`LogLevel::None`] for
    /// out-of-range indices.
    pub fn threshold(&self, index: usize, subsystem: Subsystem) -> LogLevel {
        match self.sinks.get(index) {
            Some(sink) => sink.threshold(subsystem),
            None => LogLevel::None,
        }
    }

    /// Enables or disables colored output on sink `index`.
    pub fn set_color(&mut self, index: usize, enabled: bool) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.set_color(enabled);
        }
    }

    /// Whether sink `index` colors its output; `false` out of range.
    pub fn is_colored(&self, index: usize) -> bool {
        match self.sinks.get(index) {
            Some(sink) => sink.is_colored(),
            None => false,
        }
    }

    /// Enables or disables timestamps on sink `index`.
    pub fn set_timestamp(&mut self, index: usize, enabled: bool) {
        if let Some(sink) = self.sinks.get_mut(index) {
            sink.set_timestamp(enabled);
        }
    }

    /// Whether sink `index` prefixes timestamps; `false` out of range.
    pub fn has_timestamp(&self, index: usize) -> bool {
        match self.sinks.get(index) {
            Some(sink) => sink.has_timestamp(),
            None => false,
        }
    }

    // ------------------------------
    // filtering
    // ------------------------------

    /// Whether at least one active sink would accept an entry at `level`
    /// under `subsystem`. This gates buffering, so messages nobody wants
    /// never cost a ring slot.
    pub fn accepts(&self, subsystem: Subsystem, level: LogLevel) -> bool {
        self.sinks.iter().any(|sink| sink.accepts(subsystem, level))
    }

    /// The same check scoped to sink `index`; `false` for out-of-range
    /// indices.
    pub fn sink_accepts(&self, index: usize, subsystem: Subsystem, level: LogLevel) -> bool {
        match self.sinks.get(index) {
            Some(sink) => sink.accepts(subsystem, level),
            None => false,
        }
    }

    // ------------------------------
    // logging services
    // ------------------------------

    /// Buffers a message without trying to deliver it.
    ///
    /// The message is truncated to the entry capacity; when a time source
    /// is configured it stamps the entry, and a failing time source
    /// leaves the timestamp empty. A message no sink accepts has no
    /// observable effect.
    pub fn log(&mut self, subsystem: Subsystem, level: LogLevel, text: &str) {
        if !self.accepts(subsystem, level) {
            return;
        }
        let source = self.time_source;
        let index = self.push_item();
        let item = &mut self.items[index];
        item.stamp(subsystem, level);
        item.set_message(text);
        if let Some(source) = source {
            item.render_timestamp(source);
        }
    }

    /// Buffers a message and immediately tries to flush the ring.
    ///
    /// May block for as long as a destination's write blocks.
    pub fn output(&mut self, subsystem: Subsystem, level: LogLevel, text: &str) {
        self.log(subsystem, level, text);
        self.flush();
    }

    /// Formats `args` into a bounded scratch, then buffers and flushes
    /// the result. Over-length output is truncated, never overflowed.
    ///
    /// The `log_crit!` .. `log_debug!` macro family wraps this.
    pub fn log_fmt(&mut self, subsystem: Subsystem, level: LogLevel, args: fmt::Arguments) {
        if !self.accepts(subsystem, level) {
            return;
        }
        let mut scratch = [0u8; MAX_MESSAGE_LENGTH];
        let mut writer = BoundedWriter::new(&mut scratch);
        let _ = writer.write_fmt(args);
        let written = writer.written();
        let text = core::str::from_utf8(&scratch[..written]).unwrap_or("");
        self.output(subsystem, level, text);
    }

    /// Delivers buffered entries, oldest first, until the ring is empty
    /// or a round makes no progress.
    ///
    /// Each round formats the oldest entry once per sink that accepts it
    /// and retires the entry as soon as one destination reports success.
    /// When every attempted write fails the entry stays put and the loop
    /// stops; the next flush retries it.
    pub fn flush(&mut self) {
        while self.level > 0 {
            if !self.output_once() {
                break;
            }
        }
    }

    /// Number of entries currently buffered.
    pub fn buffered(&self) -> usize {
        self.level
    }

    /// Number of entries overwritten before any sink accepted them.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    // ----------------------------------
    // internal helpers
    // ----------------------------------

    /// One dispatch round over the oldest entry. Returns whether the
    /// entry was retired.
    fn output_once(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        let mut delivered = false;
        for index in 0..MAX_SINKS {
            let item = &self.items[self.head];
            if !self.sinks[index].accepts(item.subsystem(), item.level()) {
                continue;
            }
            self.format_for(index);
            if self.sinks[index].write(self.contents.as_str()) {
                delivered = true;
            }
        }
        if delivered {
            self.pop_item();
        }
        delivered
    }

    /// Assembles the oldest entry's text for sink `index` in the shared
    /// scratch: color prefix, timestamp, severity label, clamped message,
    /// color reset, newline.
    fn format_for(&mut self, index: usize) {
        let sink = &self.sinks[index];
        let item = &self.items[self.head];
        let contents = &mut self.contents;

        contents.clear();
        if sink.is_colored() {
            contents.push(item.level().color_code());
        }
        if sink.has_timestamp() && !item.timestamp().is_empty() {
            contents.push(item.timestamp());
            contents.push(" ");
        }
        contents.push(item.level().label());
        let reserve = if sink.is_colored() {
            COLOR_RESET_LENGTH + NEWLINE_LENGTH
        } else {
            NEWLINE_LENGTH
        };
        contents.push_clamped(item.message(), reserve);
        if sink.is_colored() {
            contents.push(item.level().reset_color_code());
        }
        contents.push("\n");
    }

    /// Claims the slot for a new entry. When the ring is full the slot of
    /// the oldest entry is reused and `level` stays at the capacity; the
    /// evicted entry is counted in [`LogCore::dropped`].
    pub(crate) fn push_item(&mut self) -> usize {
        let index = (self.head + self.level) % BUFFER_LENGTH;
        if self.level < BUFFER_LENGTH {
            self.level += 1;
        } else {
            self.dropped += 1;
        }
        index
    }

    /// Retires the oldest entry. Silent no-op on an empty ring.
    pub(crate) fn pop_item(&mut self) {
        if self.level > 0 {
            self.level -= 1;
            self.head = (self.head + 1) % BUFFER_LENGTH;
        }
    }

    #[cfg(test)]
    pub(crate) fn head_index(&self) -> usize {
        self.head
    }
}

impl Default for LogCore<'_> {
    fn default() -> Self {
        Self::new()
    }
}
