// src/tests/format.rs

use core::fmt::Write;

use std::format;
use std::string::String;

use super::Capture;
use crate::config::MAX_MESSAGE_LENGTH;
use crate::{LogCore, LogLevel, Subsystem};

#[test]
fn colored_output_wraps_the_line() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_subsystem_threshold(0, Subsystem::General, LogLevel::Info);
    log.set_color(0, true);

    log.output(Subsystem::General, LogLevel::Info, "ready");

    assert_eq!(capture.contents(), "\x1b[32;40mI ready\x1b[0m\n");
}

#[test]
fn timestamp_prefixes_the_label() {
    let clock = |out: &mut dyn Write| out.write_str("2022-01-29T19:46:51Z").is_ok();
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.set_time_source(&clock);
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);
    log.set_timestamp(0, true);

    log.output(Subsystem::General, LogLevel::Info, "ready");

    assert_eq!(capture.contents(), "2022-01-29T19:46:51Z I ready\n");
}

#[test]
fn failing_time_source_leaves_no_trace() {
    let clock = |_: &mut dyn Write| false;
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.set_time_source(&clock);
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);
    log.set_timestamp(0, true);

    log.output(Subsystem::General, LogLevel::Info, "ready");

    assert_eq!(capture.contents(), "I ready\n");
}

#[test]
fn timestamp_flag_without_time_source() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);
    log.set_timestamp(0, true);

    log.output(Subsystem::General, LogLevel::Info, "ready");

    assert_eq!(capture.contents(), "I ready\n");
}

#[test]
fn colored_and_timestamped() {
    let clock = |out: &mut dyn Write| out.write_str("123").is_ok();
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.set_time_source(&clock);
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Debug);
    log.set_color(0, true);
    log.set_timestamp(0, true);

    log.output(Subsystem::General, LogLevel::Debug, "tick");

    assert_eq!(capture.contents(), "\x1b[37;40m123 D tick\x1b[0m\n");
}

#[test]
fn long_messages_are_clamped() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);

    let long = "a".repeat(MAX_MESSAGE_LENGTH * 2);
    log.output(Subsystem::General, LogLevel::Info, &long);

    let expected = format!("I {}\n", "a".repeat(MAX_MESSAGE_LENGTH));
    assert_eq!(capture.contents(), expected);
}

#[test]
fn truncation_respects_utf8_boundaries() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);

    // 95 ASCII bytes followed by a three-byte character that would
    // straddle the capacity; the whole character has to go.
    let mut message: String = "a".repeat(MAX_MESSAGE_LENGTH - 1);
    message.push('€');
    log.output(Subsystem::General, LogLevel::Info, &message);

    let expected = format!("I {}\n", "a".repeat(MAX_MESSAGE_LENGTH - 1));
    assert_eq!(capture.contents(), expected);
}

#[test]
fn multibyte_text_survives_intact() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Info);

    log.output(Subsystem::General, LogLevel::Info, "température 23 °C");

    assert_eq!(capture.contents(), "I température 23 °C\n");
}

#[test]
fn level_none_formats_without_label_or_color() {
    let capture = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &capture);
    log.set_threshold(0, LogLevel::Debug);
    log.set_color(0, true);

    log.output(Subsystem::General, LogLevel::None, "raw line");

    // No label and no color prefix; the reset still closes the line.
    assert_eq!(capture.contents(), "raw line\x1b[0m\n");
}

#[test]
fn each_sink_gets_its_own_rendering() {
    let plain = Capture::new();
    let fancy = Capture::new();
    let mut log = LogCore::new();
    log.attach(0, &plain);
    log.set_threshold(0, LogLevel::Info);
    log.attach(1, &fancy);
    log.set_threshold(1, LogLevel::Info);
    log.set_color(1, true);

    log.output(Subsystem::General, LogLevel::Info, "ready");

    assert_eq!(plain.contents(), "I ready\n");
    assert_eq!(fancy.contents(), "\x1b[32;40mI ready\x1b[0m\n");
}
