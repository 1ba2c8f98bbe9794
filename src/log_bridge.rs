// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter from the [`log`] crate facade to a [`Logger`].
//!
//! Libraries that log through `log::info!` and friends can be routed into a levelwise
//! logger, including its buffering: records emitted before the level is known are held
//! and replayed when [`LogBridge::set_level`] is first called.
//!
//! | `log` level | [`Logger`] method |
//! |---|---|
//! | `Error` | [`error`](Logger::error) |
//! | `Warn` | [`warn`](Logger::warn) |
//! | `Info` | [`info`](Logger::info) |
//! | `Debug` | [`debug`](Logger::debug) |
//! | `Trace` | [`trace`](Logger::trace) |
//!
//! ```no_run
//! use levelwise::{Level, LogBridge, Logger};
//!
//! let bridge = LogBridge::new(Logger::default()).install().unwrap();
//! log::info!("queued until the level is known");
//! bridge.set_level(Level::Info);
//! ```

use crate::level::Level;
use crate::logger::Logger;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`Logger`] shared behind a mutex, usable as the global `log` logger.
#[derive(Debug)]
pub struct LogBridge {
    logger: Mutex<Logger>,
    installed: AtomicBool,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: Mutex::new(logger),
            installed: AtomicBool::new(false),
        }
    }

    /**
    Registers the bridge as the process-wide `log` logger.

    The bridge lives for the rest of the program; the returned reference is how the level is
    changed later.  The `log` max level follows the logger's level, and stays at `Trace`
    while it is unset so that early records reach the buffer.
    */
    pub fn install(self) -> Result<&'static LogBridge, SetLoggerError> {
        let bridge: &'static LogBridge = Box::leak(Box::new(self));
        log::set_logger(bridge)?;
        bridge.installed.store(true, Ordering::Release);
        log::set_max_level(level_filter(bridge.lock().level()));
        Ok(bridge)
    }

    /// Sets the wrapped logger's level and the `log` max level.
    pub fn set_level(&self, level: Level) {
        self.with_logger(|logger| logger.set_level(level));
    }

    /**
    Runs `f` with exclusive access to the wrapped logger.

    Once installed, the `log` max level is brought in line with the logger's level
    afterwards, so a level changed inside `f` is seen by the `log` macros too.
    */
    pub fn with_logger<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        let mut logger = self.lock();
        let result = f(&mut logger);
        let level = logger.level();
        drop(logger);
        if self.installed.load(Ordering::Acquire) {
            log::set_max_level(level_filter(level));
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, Logger> {
        // a panicking sink leaves the logger itself consistent
        self.logger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> Logger {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

fn level_filter(level: Option<Level>) -> LevelFilter {
    match level {
        None => LevelFilter::Trace,
        Some(Level::Silent) => LevelFilter::Off,
        Some(Level::Error) => LevelFilter::Error,
        Some(Level::Warn) => LevelFilter::Warn,
        Some(Level::Info | Level::Verbose) => LevelFilter::Info,
        Some(Level::Debug) => LevelFilter::Debug,
        Some(Level::Trace | Level::All) => LevelFilter::Trace,
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = level_from_log(metadata.level());
        self.lock().is_level(level)
    }

    fn log(&self, record: &Record) {
        let args = record.args();
        let mut logger = self.lock();
        match record.level() {
            log::Level::Error => logger.error(*args),
            log::Level::Warn => logger.warn(args),
            log::Level::Info => logger.info(args),
            log::Level::Debug => logger.debug(args),
            log::Level::Trace => logger.trace(args),
        }
    }

    fn flush(&self) {
        // sinks are unbuffered
    }
}
