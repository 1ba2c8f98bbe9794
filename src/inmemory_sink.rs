// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A [`Sink`] that keeps every line in memory, one vector per channel, instead of writing
//! to the process streams.  It stands in for the console when:
//!
//! - unit testing code that logs through a [`Logger`](crate::Logger)
//! - stdout/stderr are redirected or unavailable
//! - output has to be examined programmatically
//!
//! Each call to the sink is one entry.  A multi-line message written in one call (such as
//! a [`Diagnostic`](crate::Diagnostic)) stays one entry.

use crate::sink::Sink;
use std::sync::Mutex;

/// A sink that stores lines in a `Vec<String>` per channel.
///
/// # Example
///
/// ```rust
/// use levelwise::{InMemorySink, Level, Logger, LoggerParameters};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let mut logger = Logger::new(
///     LoggerParameters::new().level(Level::Info).sink(sink.clone()),
/// );
///
/// logger.info("hello");
/// logger.warn("oops");
///
/// assert_eq!(sink.out_lines(), vec!["hello"]);
/// assert_eq!(sink.err_lines(), vec!["warning: oops"]);
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by Sink
// - Default: Implemented with obvious zero-value (empty buffers)
// - Clone: NOT implemented - share through Arc so the logger and the test see one buffer
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex-protected state is problematic
// - Send/Sync: Automatically implemented due to Mutex usage (required for Sink)

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates a sink with both channels empty.
    pub fn new() -> Self {
        Self {
            out: Mutex::new(Vec::new()),
            err: Mutex::new(Vec::new()),
        }
    }

    /// A copy of every line written to the normal channel so far.
    pub fn out_lines(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    /// A copy of every line written to the error channel so far.
    pub fn err_lines(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }

    /// Takes the normal channel's lines, leaving it empty.
    pub fn drain_out(&self) -> Vec<String> {
        std::mem::take(&mut *self.out.lock().unwrap())
    }

    /// Takes the error channel's lines, leaving it empty.
    pub fn drain_err(&self) -> Vec<String> {
        std::mem::take(&mut *self.err.lock().unwrap())
    }

    /// Empties both channels.
    pub fn clear(&self) {
        self.out.lock().unwrap().clear();
        self.err.lock().unwrap().clear();
    }

    /// Whether nothing has been written to either channel.
    pub fn is_empty(&self) -> bool {
        self.out.lock().unwrap().is_empty() && self.err.lock().unwrap().is_empty()
    }
}

impl Sink for InMemorySink {
    fn write_line(&self, line: &str) {
        self.out.lock().unwrap().push(line.to_string());
    }

    fn write_error_line(&self, line: &str) {
        self.err.lock().unwrap().push(line.to_string());
    }
}
