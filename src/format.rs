//! Bounded text assembly for fixed-capacity buffers.
//!
//! Nothing here allocates: both writers copy into caller-owned arrays and
//! silently drop whatever does not fit, always cutting at a UTF-8
//! character boundary so the stored bytes stay valid `str` data.

use core::cmp::min;
use core::fmt::{self, Write};

use crate::config::FORMAT_LENGTH;

/// A `fmt::Write` sink over a fixed byte slice that truncates instead of
/// failing once the slice is full.
pub(crate) struct BoundedWriter<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Bytes written so far.
    pub(crate) fn written(&self) -> usize {
        self.position
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.buffer.len() - self.position;
        let mut take = min(s.len(), remaining);
        // Never split a multi-byte character.
        while take < s.len() && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buffer[self.position..self.position + take].copy_from_slice(&s.as_bytes()[..take]);
        self.position += take;
        Ok(())
    }
}

/// The shared scratch buffer one formatted entry is assembled in before it
/// is handed to a sink. Rebuilt from scratch for every (entry, sink) pair.
pub(crate) struct FormatBuffer {
    buffer: [u8; FORMAT_LENGTH],
    length: usize,
}

impl FormatBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            buffer: [0; FORMAT_LENGTH],
            length: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.length = 0;
    }

    fn remaining(&self) -> usize {
        FORMAT_LENGTH - self.length
    }

    /// Appends `s` only when it fits in full; otherwise the buffer is left
    /// unchanged. Fixed fragments (color codes, labels, the newline) go
    /// through here.
    pub(crate) fn push(&mut self, s: &str) {
        if s.len() <= self.remaining() {
            self.buffer[self.length..self.length + s.len()].copy_from_slice(s.as_bytes());
            self.length += s.len();
        }
    }

    /// Appends as much of `s` as fits while keeping `reserve` bytes free,
    /// cutting at a character boundary. The message body goes through
    /// here so the reset sequence and newline always have room.
    pub(crate) fn push_clamped(&mut self, s: &str, reserve: usize) {
        let available = self.remaining().saturating_sub(reserve);
        let mut take = min(s.len(), available);
        while take < s.len() && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buffer[self.length..self.length + take].copy_from_slice(&s.as_bytes()[..take]);
        self.length += take;
    }

    pub(crate) fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buffer[..self.length]).unwrap_or("")
    }
}
