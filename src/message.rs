// SPDX-License-Identifier: MIT OR Apache-2.0

//! What [`Logger::error`](crate::Logger::error) accepts.
//!
//! An error call carries either ordinary text, which gets the `error: ` prefix, or a
//! [`Diagnostic`], which already names itself and is written as-is.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::{Arguments, Display, Formatter};

/// The argument of an error-severity call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    /// A plain message; written with the `error: ` prefix.
    Text(String),
    /// A structured error; written as its own multi-line text.
    Diagnostic(Diagnostic),
}

impl From<&str> for ErrorMessage {
    fn from(value: &str) -> Self {
        ErrorMessage::Text(value.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(value: String) -> Self {
        ErrorMessage::Text(value)
    }
}

impl From<Arguments<'_>> for ErrorMessage {
    fn from(value: Arguments<'_>) -> Self {
        ErrorMessage::Text(value.to_string())
    }
}

impl From<Diagnostic> for ErrorMessage {
    fn from(value: Diagnostic) -> Self {
        ErrorMessage::Diagnostic(value)
    }
}

/**
A named error with a message and a stack.

Displayed as `"<name>: <message>"` followed by one line per stack entry:

```
use levelwise::Diagnostic;

let diagnostic = Diagnostic::new("Error", "msg")
    .with_stack(["    at parse (input.rs:10)", "    at main (main.rs:3)"]);
assert_eq!(
    diagnostic.to_string(),
    "Error: msg\n    at parse (input.rs:10)\n    at main (main.rs:3)"
);
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    name: String,
    message: String,
    stack: Vec<String>,
}

impl Diagnostic {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: Vec::new(),
        }
    }

    pub fn with_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack.extend(stack.into_iter().map(Into::into));
        self
    }

    /**
    Builds a diagnostic from any error value.

    The name is the error's type name without its module path.  The stack lists the
    `source()` chain, then the frames of a backtrace captured here.  The backtrace is
    captured regardless of `RUST_BACKTRACE`; it is only missing on platforms that
    cannot produce one.
    */
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let mut stack = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push(format!("    caused by: {}", cause));
            source = cause.source();
        }
        let backtrace = Backtrace::force_capture();
        if backtrace.status() == BacktraceStatus::Captured {
            stack.extend(backtrace.to_string().lines().map(str::to_string));
        }
        Self {
            name: short_type_name::<E>().to_string(),
            message: error.to_string(),
            stack,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> &[String] {
        &self.stack
    }
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    // generic parameters may contain `::` themselves
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;
        for frame in &self.stack {
            write!(f, "\n{}", frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct ParseError {
        cause: std::num::ParseIntError,
    }

    impl fmt::Display for ParseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("bad config")
        }
    }

    impl std::error::Error for ParseError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.cause)
        }
    }

    #[test]
    fn from_error_names_type_and_walks_sources() {
        let cause = "x".parse::<u8>().unwrap_err();
        let error = ParseError { cause };
        let diagnostic = Diagnostic::from_error(&error);

        assert_eq!(diagnostic.name(), "ParseError");
        assert_eq!(diagnostic.message(), "bad config");
        assert_eq!(
            diagnostic.stack()[0],
            "    caused by: invalid digit found in string"
        );
        assert!(diagnostic.to_string().starts_with("ParseError: bad config\n"));
    }

    #[test]
    fn from_error_always_carries_a_backtrace() {
        // no source chain, so every stack line comes from the backtrace
        let error = std::io::Error::other("msg");
        let diagnostic = Diagnostic::from_error(&error);
        assert!(!diagnostic.stack().is_empty());
        assert!(diagnostic.to_string().lines().count() > 1);
    }

    #[test]
    fn without_stack_is_one_line() {
        let diagnostic = Diagnostic::new("Error", "msg");
        assert_eq!(diagnostic.to_string(), "Error: msg");
    }

    #[test]
    fn conversions() {
        assert_eq!(ErrorMessage::from("a"), ErrorMessage::Text("a".to_string()));
        assert_eq!(
            ErrorMessage::from(format_args!("{}-{}", 1, 2)),
            ErrorMessage::Text("1-2".to_string())
        );
        let diagnostic = Diagnostic::new("Error", "b");
        assert_eq!(
            ErrorMessage::from(diagnostic.clone()),
            ErrorMessage::Diagnostic(diagnostic)
        );
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<ParseError>(), "ParseError");
    }
}
