//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# levelwise

levelwise is a leveled console logger for command line tools.

# The problem

A command line tool wants its output filtered by a verbosity level, but it often has to
start logging before it knows that level: the level comes from a flag or a config file that
is parsed by code which itself wants to log.

levelwise lets the logger exist from the first line of `main`.  Until a level is assigned,
every call is kept in a queue.  The first time the level is set, the queue is replayed in
order, and each call is written exactly as if the level had been known when it was made.

# Levels

From least to most verbose: `silent`, `error`, `warn`, `info`, `verbose`, `debug`, `trace`,
`all`.

| Method    | Writes at           | Channel | Prefix                                   |
|-----------|---------------------|---------|------------------------------------------|
| `always`  | every level         | output  |                                          |
| `error`   | `error` and above   | error   | `error: ` (none for a [`Diagnostic`])    |
| `output`  | `error` and above   | output  |                                          |
| `warn`    | `warn` and above    | error   | `warning: `                              |
| `info`    | `info` and above    | output  |                                          |
| `verbose` | `verbose` and above | output  |                                          |
| `debug`   | `debug` and above   | output  | `debug: `                                |
| `trace`   | `trace` and above   | output  | `trace: `                                |

# The API

```rust
use levelwise::{Level, Logger};

let mut logger = Logger::default();
levelwise::info!(logger, "starting {}", "up");   // queued
logger.set_level(Level::Info);                  // "starting up" is written now
logger.warn("disk almost full");                // "warning: disk almost full" on stderr
```

Output goes to a [`Sink`], a pair of line writers.  [`StdSink`] (stdout and stderr, or the
browser console on wasm32) is the default; [`InMemorySink`] captures lines for tests.

# The `log` crate

With the `log` feature (on by default), [`LogBridge`] installs a levelwise logger as the
global [`log`](https://crates.io/crates/log) logger.
*/

mod level;
mod logger;
mod sink;
mod std_sink;
mod inmemory_sink;
mod message;
mod macros;
mod log_record;
#[cfg(feature = "log")]
mod log_bridge;

pub use level::{Level, NumericLevel, InvalidLevel, LEVEL_TABLE};
pub use logger::{Logger, LoggerParameters, LEVEL_ENV_VAR, UNSET_NAME};
pub use sink::{Sink, Channel};
pub use std_sink::StdSink;
pub use inmemory_sink::InMemorySink;
pub use message::{ErrorMessage, Diagnostic};
pub use log_record::BufferedRecord;
#[cfg(feature = "log")]
pub use log_bridge::LogBridge;
