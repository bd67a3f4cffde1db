//! Severity vocabulary.
//!
//! Levels are totally ordered by their numeric value: a smaller value is
//! more urgent. An entry passes a sink's filter iff
//! `entry_level <= threshold`, so `Critical` passes every threshold except
//! `None`, and a `Debug` threshold lets everything through.

use core::fmt;

/// Severity of a log entry, doubling as a sink's filter threshold.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Not logging anything at all.
    None = 0,
    /// Only critical errors.
    Critical = 1,
    /// All errors.
    Error = 2,
    /// All warnings and all errors.
    Warning = 3,
    /// Errors, warnings and useful info (release builds).
    Info = 4,
    /// Everything, including debug chatter.
    Debug = 5,
}

impl LogLevel {
    /// Full name, for configuration surfaces and diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "None",
            LogLevel::Critical => "Critical",
            LogLevel::Error => "Error",
            LogLevel::Warning => "Warning",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
        }
    }

    /// Short label prefixed to formatted output.
    pub const fn label(&self) -> &'static str {
        match self {
            LogLevel::None => "",
            LogLevel::Critical => "C ",
            LogLevel::Error => "E ",
            LogLevel::Warning => "W ",
            LogLevel::Info => "I ",
            LogLevel::Debug => "D ",
        }
    }

    /// ANSI escape prefix for colored output, empty for [`LogLevel::None`].
    pub const fn color_code(&self) -> &'static str {
        match self {
            LogLevel::None => "",
            LogLevel::Critical => "\x1b[31;1m",
            LogLevel::Error => "\x1b[31;40m",
            LogLevel::Warning => "\x1b[33;40m",
            LogLevel::Info => "\x1b[32;40m",
            LogLevel::Debug => "\x1b[37;40m",
        }
    }

    /// ANSI escape that restores the default color.
    pub const fn reset_color_code(&self) -> &'static str {
        "\x1b[0m"
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
