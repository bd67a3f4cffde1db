//! Compile-time sizing of the logging core.
//!
//! All storage in this crate is pre-declared from the constants below;
//! nothing grows at runtime.

use crate::level::LogLevel;

/// Number of output sinks owned by a [`crate::LogCore`].
pub const MAX_SINKS: usize = 2;

/// Number of slots in the ring buffer of buffered entries.
pub const BUFFER_LENGTH: usize = 4;

/// Maximum length, in bytes, of a single buffered message.
pub const MAX_MESSAGE_LENGTH: usize = 96;

/// Maximum length, in bytes, of a rendered timestamp.
pub const TIMESTAMP_LENGTH: usize = 21;

/// Length of the short severity label (`"C "`, `"E "`, ...).
pub(crate) const LABEL_LENGTH: usize = 2;

/// Longest ANSI color prefix any severity emits.
pub(crate) const COLOR_PREFIX_LENGTH: usize = 8;

/// Length of the ANSI reset sequence appended after colored text.
pub(crate) const COLOR_RESET_LENGTH: usize = 4;

/// The space between a timestamp and the severity label.
pub(crate) const TIMESTAMP_SEPARATOR_LENGTH: usize = 1;

/// The trailing newline.
pub(crate) const NEWLINE_LENGTH: usize = 1;

/// Capacity of the shared scratch buffer a single formatted entry is
/// assembled in. Sized so the worst case (colored, timestamped, full-length
/// message) fits without clamping.
pub const FORMAT_LENGTH: usize = COLOR_PREFIX_LENGTH
    + TIMESTAMP_LENGTH
    + TIMESTAMP_SEPARATOR_LENGTH
    + LABEL_LENGTH
    + MAX_MESSAGE_LENGTH
    + COLOR_RESET_LENGTH
    + NEWLINE_LENGTH;

// The reserve arithmetic in the formatter counts on these.
const _: () = {
    assert!(LogLevel::None.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::Critical.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::Error.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::Warning.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::Info.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::Debug.color_code().len() <= COLOR_PREFIX_LENGTH);
    assert!(LogLevel::None.reset_color_code().len() == COLOR_RESET_LENGTH);
    assert!(LogLevel::None.label().len() <= LABEL_LENGTH);
    assert!(LogLevel::Info.label().len() == LABEL_LENGTH);
};
