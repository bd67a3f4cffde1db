//! Subsystem vocabulary.
//!
//! A subsystem tags each entry with the part of the firmware it came from,
//! so every sink can filter noisy areas independently. The set is closed
//! and has no identity beyond its ordinal; applications adapting this
//! crate edit the enum here and nothing else.

use core::fmt;

/// Origin tag of a log entry, used as a per-sink filter key.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    /// Anything without a better home.
    General = 0,
    /// Machine / main state machine control.
    Machine = 1,
    /// Memory usage and allocator-free bookkeeping.
    Memory = 2,
    /// Filesystem and storage media.
    Filesystem = 3,
    /// Display and UI output.
    Display = 4,
    /// Network connectivity and traffic.
    Network = 5,
}

impl Subsystem {
    /// Number of subsystems; sizes every per-subsystem table.
    pub const COUNT: usize = 6;

    /// Every subsystem, in ordinal order.
    pub const ALL: [Subsystem; Self::COUNT] = [
        Subsystem::General,
        Subsystem::Machine,
        Subsystem::Memory,
        Subsystem::Filesystem,
        Subsystem::Display,
        Subsystem::Network,
    ];

    /// Ordinal of this subsystem, valid as an index into `[_; COUNT]`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name, also accepted by [`Subsystem::from_name`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Subsystem::General => "general",
            Subsystem::Machine => "machine",
            Subsystem::Memory => "memory",
            Subsystem::Filesystem => "filesystem",
            Subsystem::Display => "display",
            Subsystem::Network => "network",
        }
    }

    /// Looks a subsystem up by its name.
    pub fn from_name(name: &str) -> Option<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .find(|subsystem| subsystem.as_str() == name)
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
