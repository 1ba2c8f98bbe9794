// SPDX-License-Identifier: MIT OR Apache-2.0

//! Level filtering, prefixes and channels once a level is known.

use levelwise::{Diagnostic, InMemorySink, Level, Logger, LoggerParameters};
use std::sync::Arc;

fn logger_at(level: Level) -> (Logger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(LoggerParameters::new().level(level).sink(sink.clone()));
    sink.clear();
    (logger, sink)
}

type Method = fn(&mut Logger, &str);

// (method, threshold; None for always)
fn methods() -> [(&'static str, Method, Option<Level>); 8] {
    [
        ("always", |l, m| l.always(m), None),
        ("error", |l, m| l.error(m), Some(Level::Error)),
        ("output", |l, m| l.output(m), Some(Level::Error)),
        ("warn", |l, m| l.warn(m), Some(Level::Warn)),
        ("info", |l, m| l.info(m), Some(Level::Info)),
        ("verbose", |l, m| l.verbose(m), Some(Level::Verbose)),
        ("debug", |l, m| l.debug(m), Some(Level::Debug)),
        ("trace", |l, m| l.trace(m), Some(Level::Trace)),
    ]
}

#[test]
fn each_method_fires_iff_level_reaches_threshold() {
    for level in Level::ALL {
        for (name, method, threshold) in methods() {
            let (mut logger, sink) = logger_at(level);
            method(&mut logger, "m");
            let expected = threshold.is_none_or(|t| level >= t);
            assert_eq!(
                !sink.is_empty(),
                expected,
                "{} at level {}",
                name,
                level
            );
        }
    }
}

#[test]
fn scenario_info() {
    let (mut logger, sink) = logger_at(Level::Info);
    logger.info("hello");
    logger.warn("oops");
    logger.error("bad");
    assert_eq!(sink.out_lines(), vec!["hello"]);
    assert_eq!(sink.err_lines(), vec!["warning: oops", "error: bad"]);
}

#[test]
fn scenario_silent() {
    let (mut logger, sink) = logger_at(Level::Silent);
    logger.error("z");
    assert!(sink.is_empty());
    logger.always("go");
    assert_eq!(sink.out_lines(), vec!["go"]);
    assert!(sink.err_lines().is_empty());
}

#[test]
fn diagnostic_is_written_unprefixed() {
    let (mut logger, sink) = logger_at(Level::Info);
    let diagnostic = Diagnostic::new("Error", "msg").with_stack([
        "    at read_config (config.rs:41)",
        "    at main (main.rs:7)",
    ]);
    logger.error(diagnostic);

    let err = sink.err_lines();
    assert_eq!(err.len(), 1);
    let mut lines = err[0].lines();
    assert_eq!(lines.next(), Some("Error: msg"));
    assert_eq!(lines.next(), Some("    at read_config (config.rs:41)"));
    assert_eq!(lines.next(), Some("    at main (main.rs:7)"));
    assert_eq!(lines.next(), None);
}

#[test]
fn diagnostic_from_std_error() {
    let (mut logger, sink) = logger_at(Level::Error);
    let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    logger.error(Diagnostic::from_error(&error));

    let err = sink.err_lines();
    assert_eq!(err.len(), 1);
    let lines: Vec<&str> = err[0].lines().collect();
    assert_eq!(lines[0], "Error: no such file");
    assert!(lines.len() > 1, "stack lines follow the message: {:?}", lines);
    assert!(!err[0].starts_with("error: "));
}

#[test]
fn diagnostic_is_filtered_like_text() {
    let (mut logger, sink) = logger_at(Level::Silent);
    logger.error(Diagnostic::new("Error", "msg"));
    assert!(sink.is_empty());
}

#[test]
fn is_level_agrees_with_accessors() {
    for current in Level::ALL {
        let (logger, _sink) = logger_at(current);
        let accessors: [(Level, bool); 8] = [
            (Level::Silent, logger.is_silent()),
            (Level::Error, logger.is_error()),
            (Level::Warn, logger.is_warn()),
            (Level::Info, logger.is_info()),
            (Level::Verbose, logger.is_verbose()),
            (Level::Debug, logger.is_debug()),
            (Level::Trace, logger.is_trace()),
            (Level::All, logger.is_all()),
        ];
        for (level, accessor) in accessors {
            assert_eq!(logger.is_level(level), accessor);
            assert_eq!(logger.is_level_named(level.name()), Ok(accessor));
        }
    }
}

#[test]
fn round_trip() {
    let (mut logger, _sink) = logger_at(Level::Silent);
    for level in Level::ALL {
        logger.set_level(level);
        assert_eq!(logger.level_name(), level.name());
        assert!(logger.is_level(level));
        for other in Level::ALL {
            assert_eq!(logger.is_level(other), other <= level, "{} at {}", other, level);
        }
    }
}

#[test]
fn accessors_do_not_touch_the_queue() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::with_sink(sink.clone());
    let before = logger.buffered_len();
    let _ = (logger.is_all(), logger.is_silent(), logger.is_level_named("nope"));
    assert_eq!(logger.buffered_len(), before);
    assert!(!logger.has_level());
    assert!(sink.is_empty());
}

#[test]
fn level_named_parameter() {
    let params = LoggerParameters::new().level_named("verbose").unwrap();
    let logger = Logger::new(params);
    assert_eq!(logger.level(), Some(Level::Verbose));

    let err = LoggerParameters::new().level_named("").unwrap_err();
    assert_eq!(err.value(), "");
}
