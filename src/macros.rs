// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting macros for the [`Logger`](crate::Logger) output methods.
//!
//! Each macro takes the logger first, then an optional `format!`-style template and its
//! arguments:
//!
//! ```
//! use levelwise::{InMemorySink, Level, Logger, LoggerParameters};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let mut logger = Logger::new(LoggerParameters::new().level(Level::Debug).sink(sink.clone()));
//!
//! let count = 3;
//! levelwise::info!(logger, "copied {} files", count);
//! levelwise::debug!(logger, "took {ms}ms", ms = 12);
//! levelwise::info!(logger);
//!
//! assert_eq!(sink.out_lines(), vec!["copied 3 files", "debug: took 12ms", ""]);
//! ```
//!
//! The template is only formatted if the call passes the logger's level.

#[doc(hidden)]
#[macro_export]
macro_rules! __levelwise_log {
    ($method:ident, $logger:expr) => {
        $logger.$method("")
    };
    ($method:ident, $logger:expr, $($arg:tt)+) => {
        $logger.$method(::core::format_args!($($arg)+))
    };
}

/// Logs with [`Logger::always`](crate::Logger::always).
#[macro_export]
macro_rules! always {
    ($($t:tt)+) => { $crate::__levelwise_log!(always, $($t)+) };
}

/// Logs with [`Logger::error`](crate::Logger::error).
///
/// The template is formatted into plain text; pass a [`Diagnostic`](crate::Diagnostic) to
/// the method directly for an unprefixed error report.
#[macro_export]
macro_rules! error {
    ($($t:tt)+) => { $crate::__levelwise_log!(error, $($t)+) };
}

/// Logs with [`Logger::output`](crate::Logger::output).
#[macro_export]
macro_rules! output {
    ($($t:tt)+) => { $crate::__levelwise_log!(output, $($t)+) };
}

/// Logs with [`Logger::warn`](crate::Logger::warn).
#[macro_export]
macro_rules! warn {
    ($($t:tt)+) => { $crate::__levelwise_log!(warn, $($t)+) };
}

/// Logs with [`Logger::info`](crate::Logger::info).
#[macro_export]
macro_rules! info {
    ($($t:tt)+) => { $crate::__levelwise_log!(info, $($t)+) };
}

/// Logs with [`Logger::verbose`](crate::Logger::verbose).
#[macro_export]
macro_rules! verbose {
    ($($t:tt)+) => { $crate::__levelwise_log!(verbose, $($t)+) };
}

/// Logs with [`Logger::debug`](crate::Logger::debug).
#[macro_export]
macro_rules! debug {
    ($($t:tt)+) => { $crate::__levelwise_log!(debug, $($t)+) };
}

/// Logs with [`Logger::trace`](crate::Logger::trace).
#[macro_export]
macro_rules! trace {
    ($($t:tt)+) => { $crate::__levelwise_log!(trace, $($t)+) };
}

#[cfg(test)]
mod tests {
    use crate::{InMemorySink, Level, Logger, LoggerParameters};
    use std::sync::Arc;

    #[test]
    fn every_macro_reaches_its_method() {
        let sink = Arc::new(InMemorySink::new());
        let mut logger = Logger::new(LoggerParameters::new().level(Level::All).sink(sink.clone()));
        sink.clear();

        let name = "disk";
        crate::always!(logger, "a {}", 1);
        crate::error!(logger, "e {}", name);
        crate::output!(logger, "o");
        crate::warn!(logger, "w {name}");
        crate::info!(logger, "i");
        crate::verbose!(logger, "v");
        crate::debug!(logger, "d {:>3}", 7);
        crate::trace!(logger);

        assert_eq!(
            sink.out_lines(),
            vec!["a 1", "o", "i", "v", "debug: d   7", "trace: "]
        );
        assert_eq!(sink.err_lines(), vec!["error: e disk", "warning: w disk"]);
    }

    #[test]
    fn macros_accept_a_mutable_reference() {
        let sink = Arc::new(InMemorySink::new());
        let mut logger = Logger::new(LoggerParameters::new().level(Level::Info).sink(sink.clone()));
        let logger_ref = &mut logger;
        crate::info!(logger_ref, "through a reference");
        assert_eq!(sink.out_lines(), vec!["through a reference"]);
    }
}
