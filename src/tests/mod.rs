// src/tests/mod.rs

use std::string::String;

use spin::Mutex;

use crate::sink::Destination;

/// Collects everything a sink delivers so tests can assert on the exact
/// bytes a destination saw.
pub(crate) struct Capture {
    text: Mutex<String>,
}

impl Capture {
    pub(crate) fn new() -> Self {
        Self {
            text: Mutex::new(String::new()),
        }
    }

    pub(crate) fn contents(&self) -> String {
        self.text.lock().clone()
    }
}

impl Destination for Capture {
    fn write(&self, text: &str) -> bool {
        self.text.lock().push_str(text);
        true
    }
}

/// A destination that refuses every write.
pub(crate) fn refuse(_text: &str) -> bool {
    false
}

mod dispatch;
mod facade;
mod format;
