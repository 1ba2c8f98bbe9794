// SPDX-License-Identifier: MIT OR Apache-2.0

//! Records of calls made before a logger knows its level.
//!
//! While a [`Logger`](crate::Logger) is unset it cannot decide whether a call should be
//! written, so it keeps a [`BufferedRecord`] instead: the severity of the call, the channel
//! it was headed for, and the already formatted line.  When the level is set, each record
//! is either written or discarded.

use crate::level::NumericLevel;
use crate::sink::{Channel, Sink};

/**
A deferred line.

Records are immutable; the only thing to do with one is to [`replay`](Self::replay) it.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BufferedRecord {
    level: NumericLevel,
    channel: Channel,
    message: String,
}

impl BufferedRecord {
    pub fn new(level: NumericLevel, channel: Channel, message: String) -> Self {
        Self {
            level,
            channel,
            message,
        }
    }

    pub fn level(&self) -> NumericLevel {
        self.level
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /**
    Writes the record if `active` admits its severity.

    Returns whether it was written.
    */
    pub fn replay(&self, active: NumericLevel, sink: &dyn Sink) -> bool {
        if active >= self.level {
            self.channel.write(sink, &self.message);
            true
        } else {
            false
        }
    }
}

/*
Boilerplate notes for BufferedRecord:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics
- Clone: Derived - records are plain data
- PartialEq/Eq/Hash: Derived - handy in tests

NOT IMPLEMENTED:
- Default: a record without a channel or severity means nothing
- Ord/PartialOrd: queue order is insertion order, not a property of the record
- Display: the message alone would hide the channel
*/
