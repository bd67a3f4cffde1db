// src/tests/facade.rs
//
// The `log` facade adapter can only be installed once per process, so
// everything lives in a single test.

use std::string::String;

use spin::Mutex;

use crate::sink::Destination;
use crate::{LogLevel, StaticLog, Subsystem};

static CAPTURED: Mutex<String> = Mutex::new(String::new());

struct SerialPort;

impl Destination for SerialPort {
    fn write(&self, text: &str) -> bool {
        CAPTURED.lock().push_str(text);
        true
    }
}

static SERIAL: SerialPort = SerialPort;
static LOG: StaticLog = StaticLog::new();

#[test]
fn records_route_through_the_core() {
    LOG.with(|core| {
        core.attach(0, &SERIAL);
        core.set_threshold(0, LogLevel::Warning);
        core.set_subsystem_threshold(0, Subsystem::Network, LogLevel::Info);
    });
    LOG.install().unwrap();

    // Unknown targets land in the general subsystem.
    log::warn!("supply voltage low");

    // Below the general threshold: filtered by the core, not the facade.
    log::debug!("background chatter");

    // A target matching a subsystem name picks that subsystem's threshold.
    log::info!(target: "network", "link up");

    assert_eq!(
        CAPTURED.lock().as_str(),
        "W supply voltage low\nI link up\n"
    );
}
