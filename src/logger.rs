// SPDX-License-Identifier: MIT OR Apache-2.0

//! The leveled logger.
//!
//! A [`Logger`] filters calls by severity and writes the survivors to a [`Sink`].  It is
//! always in one of two states:
//!
//! - **unset**: no level has been assigned yet.  Every call is formatted and kept in a
//!   queue of [`BufferedRecord`]s, because there is no way to know yet whether it should
//!   be written.
//! - **active**: a level is known.  Calls at or below it are written at once, the rest are
//!   dropped without being formatted.
//!
//! The first [`set_level`](Logger::set_level) moves the logger from unset to active and
//! replays the queue in call order, filtered by the new level.  There is no way back, so
//! the queue is replayed at most once.
//!
//! ```
//! use levelwise::{InMemorySink, Level, Logger};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let mut logger = Logger::with_sink(sink.clone());
//!
//! logger.trace("x");
//! logger.error("y");
//! assert!(sink.is_empty());
//!
//! logger.set_level(Level::Error);
//! assert_eq!(sink.err_lines(), vec!["error: y"]);
//! assert!(sink.out_lines().is_empty());
//! ```

use crate::level::{InvalidLevel, Level, NumericLevel};
use crate::log_record::BufferedRecord;
use crate::message::ErrorMessage;
use crate::sink::{Channel, Sink};
use crate::std_sink::StdSink;
use std::fmt::Display;
use std::sync::Arc;

/// Environment variable read by [`LoggerParameters::from_env`].
pub const LEVEL_ENV_VAR: &str = "LEVELWISE_LEVEL";

/// What [`Logger::level_name`] reports before a level is assigned.
pub const UNSET_NAME: &str = "unset";

/**
Construction parameters for a [`Logger`].

Both fields are optional.  Without a level the logger starts unset; without a sink it
writes to [`StdSink`].

```
use levelwise::{InMemorySink, Level, Logger, LoggerParameters};
use std::sync::Arc;

let params = LoggerParameters::new()
    .level(Level::Debug)
    .sink(Arc::new(InMemorySink::new()));
let logger = Logger::new(params);
assert_eq!(logger.level(), Some(Level::Debug));
```
*/
#[derive(Debug, Clone, Default)]
pub struct LoggerParameters {
    level: Option<Level>,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Like [`level`](Self::level), validating a level name.
    pub fn level_named(self, name: &str) -> Result<Self, InvalidLevel> {
        Ok(self.level(name.parse()?))
    }

    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /**
    Reads the level from the `LEVELWISE_LEVEL` environment variable.

    A missing or empty variable leaves the level unset.  Any other value must be a level name.
    */
    pub fn from_env() -> Result<Self, InvalidLevel> {
        Self::from_env_value(std::env::var(LEVEL_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, InvalidLevel> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::new()),
            Some(name) => Self::new().level_named(name),
        }
    }
}

#[derive(Debug)]
enum State {
    Unset(Vec<BufferedRecord>),
    Active(Level),
}

/**
A leveled logger over a two-channel [`Sink`].

| Method | Writes at | Channel | Prefix |
|---|---|---|---|
| [`always`](Self::always) | every level, even `silent` | output | |
| [`error`](Self::error) | `error` and above | error | `error: ` (none for a [`Diagnostic`](crate::Diagnostic)) |
| [`output`](Self::output) | `error` and above | output | |
| [`warn`](Self::warn) | `warn` and above | error | `warning: ` |
| [`info`](Self::info) | `info` and above | output | |
| [`verbose`](Self::verbose) | `verbose` and above | output | |
| [`debug`](Self::debug) | `debug` and above | output | `debug: ` |
| [`trace`](Self::trace) | `trace` and above | output | `trace: ` |

Messages are anything [`Display`]; use the crate's macros (`levelwise::info!(logger, "{}", x)`)
for a template with arguments.  An empty message still writes a line.
*/
#[derive(Debug)]
pub struct Logger {
    state: State,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /**
    Creates a logger.

    If `params` carries a level it is assigned first.  The logger then announces itself at
    trace level, which, like any other call, is buffered while the level is unset.
    */
    pub fn new(params: LoggerParameters) -> Self {
        let mut logger = Self {
            state: State::Unset(Vec::new()),
            sink: params.sink.unwrap_or_else(|| Arc::new(StdSink::new())),
        };
        if let Some(level) = params.level {
            logger.set_level(level);
        }
        logger.trace("Logger::new()");
        logger
    }

    /// An unset logger writing to `sink`.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self::new(LoggerParameters::new().sink(sink))
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    // ------------------------------------------------------------------------
    // Level state

    /// The current level, or `None` while unset.
    pub fn level(&self) -> Option<Level> {
        match self.state {
            State::Unset(_) => None,
            State::Active(level) => Some(level),
        }
    }

    /// The current level's name, or `"unset"`.
    pub fn level_name(&self) -> &'static str {
        self.level().map_or(UNSET_NAME, Level::name)
    }

    pub fn has_level(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    /// The current level as a number; [`NumericLevel::UNSET`] while unset.
    pub fn numeric_level(&self) -> NumericLevel {
        self.level().map_or(NumericLevel::UNSET, Level::numeric)
    }

    /// Number of calls waiting for a level.  Always 0 once a level is set.
    pub fn buffered_len(&self) -> usize {
        match &self.state {
            State::Unset(pending) => pending.len(),
            State::Active(_) => 0,
        }
    }

    /**
    Assigns the level.

    The first assignment replays every buffered call in order, writing those the new level
    admits and discarding the rest.  Later assignments only change the level.
    */
    pub fn set_level(&mut self, level: Level) {
        if let State::Unset(pending) = std::mem::replace(&mut self.state, State::Active(level)) {
            for record in &pending {
                record.replay(level.numeric(), self.sink.as_ref());
            }
        }
    }

    /// Assigns the level by name.  On error the logger is unchanged.
    pub fn set_level_named(&mut self, name: &str) -> Result<(), InvalidLevel> {
        let level = name.parse()?;
        self.set_level(level);
        Ok(())
    }

    /**
    Whether calls at `level` currently pass the filter.

    While unset this is true for every level.
    */
    pub fn is_level(&self, level: Level) -> bool {
        self.numeric_level() >= level.numeric()
    }

    pub fn is_level_named(&self, name: &str) -> Result<bool, InvalidLevel> {
        Ok(self.is_level(name.parse()?))
    }

    pub fn is_silent(&self) -> bool {
        self.is_level(Level::Silent)
    }

    pub fn is_error(&self) -> bool {
        self.is_level(Level::Error)
    }

    pub fn is_warn(&self) -> bool {
        self.is_level(Level::Warn)
    }

    pub fn is_info(&self) -> bool {
        self.is_level(Level::Info)
    }

    pub fn is_verbose(&self) -> bool {
        self.is_level(Level::Verbose)
    }

    pub fn is_debug(&self) -> bool {
        self.is_level(Level::Debug)
    }

    pub fn is_trace(&self) -> bool {
        self.is_level(Level::Trace)
    }

    pub fn is_all(&self) -> bool {
        self.is_level(Level::All)
    }

    // ------------------------------------------------------------------------
    // Output

    /**
    Writes `message` now, or buffers it while unset.

    `None` means there is nothing to say and is dropped; an empty string is still a line.
    */
    pub(crate) fn write(&mut self, level: NumericLevel, channel: Channel, message: Option<String>) {
        let Some(message) = message else {
            return;
        };
        match &mut self.state {
            State::Active(_) => channel.write(self.sink.as_ref(), &message),
            State::Unset(pending) => pending.push(BufferedRecord::new(level, channel, message)),
        }
    }

    fn fires(&self, threshold: NumericLevel) -> bool {
        self.numeric_level() >= threshold
    }

    fn log(&mut self, threshold: NumericLevel, channel: Channel, prefix: &str, message: impl Display) {
        if self.fires(threshold) {
            self.write(threshold, channel, Some(format!("{}{}", prefix, message)));
        }
    }

    /// Writes to the output channel regardless of level.
    pub fn always(&mut self, message: impl Display) {
        self.log(NumericLevel::ALWAYS, Channel::Output, "", message);
    }

    /**
    Writes an error to the error channel.

    Text gets the `error: ` prefix.  A [`Diagnostic`](crate::Diagnostic) is written as its
    own multi-line text, in a single sink call, without the prefix.
    */
    pub fn error(&mut self, message: impl Into<ErrorMessage>) {
        let threshold = Level::Error.numeric();
        if !self.fires(threshold) {
            return;
        }
        let line = match message.into() {
            ErrorMessage::Text(text) => format!("error: {}", text),
            ErrorMessage::Diagnostic(diagnostic) => diagnostic.to_string(),
        };
        self.write(threshold, Channel::Error, Some(line));
    }

    /// Writes to the output channel, at error severity.
    pub fn output(&mut self, message: impl Display) {
        self.log(Level::Error.numeric(), Channel::Output, "", message);
    }

    pub fn warn(&mut self, message: impl Display) {
        self.log(Level::Warn.numeric(), Channel::Error, "warning: ", message);
    }

    pub fn info(&mut self, message: impl Display) {
        self.log(Level::Info.numeric(), Channel::Output, "", message);
    }

    pub fn verbose(&mut self, message: impl Display) {
        self.log(Level::Verbose.numeric(), Channel::Output, "", message);
    }

    pub fn debug(&mut self, message: impl Display) {
        self.log(Level::Debug.numeric(), Channel::Output, "debug: ", message);
    }

    pub fn trace(&mut self, message: impl Display) {
        self.log(Level::Trace.numeric(), Channel::Output, "trace: ", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerParameters::default())
    }
}

/*
Boilerplate notes.

# Logger

Clone: a clone would duplicate the queue and replay it twice into the same sink.  No.
PartialEq/Eq/Hash: equality of loggers is not meaningful.
Default: unset, writing to the process streams, same as `LoggerParameters::default()`.
Send/Sync: follow from `Sink: Send + Sync`.  All mutation takes `&mut self`.
*/
