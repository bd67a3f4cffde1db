//! Timestamp acquisition.

use core::fmt;

/// Renders timestamps for buffered entries.
///
/// The core calls this once per accepted entry, handing it a bounded
/// writer over the entry's fixed-length timestamp field; text beyond the
/// capacity is silently truncated. Returning `false` signals that no
/// timestamp is available and leaves the field empty.
///
/// Closures work directly:
///
/// ```
/// use core::fmt::Write;
/// use ringlog::LogCore;
///
/// let clock = |out: &mut dyn Write| write!(out, "{:>12}", 4711u32).is_ok();
/// let mut log = LogCore::new();
/// log.set_time_source(&clock);
/// ```
pub trait TimeSource {
    /// Writes a textual timestamp into `out`.
    fn write_timestamp(&self, out: &mut dyn fmt::Write) -> bool;
}

impl<F> TimeSource for F
where
    F: Fn(&mut dyn fmt::Write) -> bool,
{
    fn write_timestamp(&self, out: &mut dyn fmt::Write) -> bool {
        self(out)
    }
}
