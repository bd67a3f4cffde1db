// src/tests/dispatch.rs
//
// Retirement semantics: an entry leaves the ring as soon as one sink
// delivered it, and not before.

use super::{Capture, refuse};
use crate::{LogCore, LogLevel, Subsystem};

#[test]
fn one_success_is_enough() {
    let working = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &working);
    log.set_threshold(0, LogLevel::Debug);
    log.attach(1, &refuse);
    log.set_threshold(1, LogLevel::Debug);

    log.log(Subsystem::General, LogLevel::Info, "first");
    log.log(Subsystem::General, LogLevel::Info, "second");
    log.flush();

    // The refusing sink never blocks the working one.
    assert_eq!(working.contents(), "I first\nI second\n");
    assert_eq!(log.buffered(), 0);
}

#[test]
fn failed_entries_are_retained_and_retried() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &refuse);
    log.set_threshold(0, LogLevel::Debug);

    log.log(Subsystem::General, LogLevel::Warning, "keep me");
    log.flush();
    assert_eq!(log.buffered(), 1);

    // Still there on a second attempt.
    log.flush();
    assert_eq!(log.buffered(), 1);

    // Once the destination works, exactly one copy comes out.
    log.attach(0, &capture);
    log.flush();
    assert_eq!(capture.contents(), "W keep me\n");
    assert_eq!(log.buffered(), 0);
}

#[test]
fn entries_survive_a_detached_sink() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Debug);

    log.log(Subsystem::General, LogLevel::Info, "buffered early");
    log.detach(0);

    // Nobody accepts the entry, so flushing makes no progress.
    log.flush();
    assert_eq!(log.buffered(), 1);
    assert_eq!(capture.contents(), "");

    log.attach(0, &capture);
    log.flush();
    assert_eq!(capture.contents(), "I buffered early\n");
    assert_eq!(log.buffered(), 0);
}

#[test]
fn dispatch_respects_per_sink_thresholds() {
    let verbose = Capture::new();
    let critical_only = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &verbose);
    log.set_threshold(0, LogLevel::Debug);
    log.attach(1, &critical_only);
    log.set_threshold(1, LogLevel::Critical);

    log.output(Subsystem::General, LogLevel::Info, "routine");
    log.output(Subsystem::General, LogLevel::Critical, "brownout");

    assert_eq!(verbose.contents(), "I routine\nC brownout\n");
    assert_eq!(critical_only.contents(), "C brownout\n");
    assert_eq!(log.buffered(), 0);
}

#[test]
fn flush_on_empty_buffer_is_a_no_op() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Debug);

    log.flush();
    assert_eq!(capture.contents(), "");
    assert_eq!(log.buffered(), 0);
}

#[test]
fn flush_does_not_redeliver() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Debug);

    log.output(Subsystem::General, LogLevel::Info, "once");
    log.flush();
    log.flush();

    assert_eq!(capture.contents(), "I once\n");
}
