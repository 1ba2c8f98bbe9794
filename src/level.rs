// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels and their numeric representation.
//!
//! A [`Level`] names a point on the verbosity scale, from [`Level::Silent`] (nothing but
//! [`Logger::always`](crate::Logger::always)) to [`Level::All`]. Each level has a fixed
//! [`NumericLevel`]; a logger compares numbers, never names.
//!
//! Names, levels and numbers all come from one table, [`LEVEL_TABLE`], so the three
//! representations cannot drift apart.
//!
//! ```
//! use levelwise::Level;
//!
//! let level: Level = "verbose".parse().unwrap();
//! assert_eq!(level, Level::Verbose);
//! assert_eq!(level.name(), "verbose");
//! assert!(Level::Verbose > Level::Info);
//! assert!("loud".parse::<Level>().is_err());
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/**
A comparable numeric severity.

Real levels map to values 0 through 70.  Two sentinels sit outside that range:
[`NumericLevel::UNSET`] is larger than every level and [`NumericLevel::ALWAYS`] is smaller.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericLevel(i32);

impl NumericLevel {
    /// The level has not been chosen yet.
    pub const UNSET: NumericLevel = NumericLevel(i32::MAX);
    /// Threshold of [`Logger::always`](crate::Logger::always); passes even at `silent`.
    pub const ALWAYS: NumericLevel = NumericLevel(-1);

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Display for NumericLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            NumericLevel::UNSET => f.write_str("unset"),
            NumericLevel::ALWAYS => f.write_str("always"),
            NumericLevel(n) => write!(f, "{}", n),
        }
    }
}

/**
Severity levels, ordered from most restrictive to most verbose.

The default is `info`, the level an application usually starts from when it has no other
input.  A [`Logger`](crate::Logger) never falls back to it on its own; a logger created
without a level stays unset.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Only `always` output.
    Silent,
    /// Errors, and the plain `output` channel.
    Error,
    /// Suspicious conditions.
    Warn,
    /// Regular informational output.
    #[default]
    Info,
    /// Additional informational output.
    Verbose,
    /// Debugging details, prefixed with `debug: `.
    Debug,
    /// Fine-grained tracing, prefixed with `trace: `.
    Trace,
    /// Everything.
    All,
}

/// The single mapping between levels, names and numbers.
pub const LEVEL_TABLE: [(Level, &str, NumericLevel); 8] = [
    (Level::Silent, "silent", NumericLevel(0)),
    (Level::Error, "error", NumericLevel(10)),
    (Level::Warn, "warn", NumericLevel(20)),
    (Level::Info, "info", NumericLevel(30)),
    (Level::Verbose, "verbose", NumericLevel(40)),
    (Level::Debug, "debug", NumericLevel(50)),
    (Level::Trace, "trace", NumericLevel(60)),
    (Level::All, "all", NumericLevel(70)),
];

impl Level {
    /// All levels, least verbose first.
    pub const ALL: [Level; 8] = [
        Level::Silent,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Verbose,
        Level::Debug,
        Level::Trace,
        Level::All,
    ];

    // Variants are declared in table order.
    const fn entry(self) -> (Level, &'static str, NumericLevel) {
        LEVEL_TABLE[self as usize]
    }

    pub const fn name(self) -> &'static str {
        self.entry().1
    }

    pub const fn numeric(self) -> NumericLevel {
        self.entry().2
    }

    /// Looks up the level with exactly this numeric value.
    ///
    /// The sentinels have no level and return `None`.
    pub fn from_numeric(numeric: NumericLevel) -> Option<Level> {
        LEVEL_TABLE
            .iter()
            .find(|(_, _, n)| *n == numeric)
            .map(|(level, _, _)| *level)
    }

    /// Looks up a level by its lowercase name.
    pub fn from_name(name: &str) -> Result<Level, InvalidLevel> {
        LEVEL_TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(level, _, _)| *level)
            .ok_or_else(|| InvalidLevel::new(name))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s)
    }
}

impl TryFrom<&str> for Level {
    type Error = InvalidLevel;

    fn try_from(value: &str) -> Result<Self, InvalidLevel> {
        Level::from_name(value)
    }
}

impl From<Level> for NumericLevel {
    fn from(level: Level) -> Self {
        level.numeric()
    }
}

/// A level name that is not one of the eight known names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("log level '{value}' not supported")]
pub struct InvalidLevel {
    value: String,
}

impl InvalidLevel {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected value, as given.
    pub fn value(&self) -> &str {
        &self.value
    }
}
