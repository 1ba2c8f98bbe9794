// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::Sink;

/**
The default sink: the process's standard output and standard error.

On wasm32 the two channels map to `console.log` and `console.error`.
 */
#[derive(Debug, Clone)]
pub struct StdSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdSink trait implementations:
//
// - Debug/Clone: Already derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances write to the same process streams
// - Hash: Implemented - consistent with Eq
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for a sink
// - Send/Sync: Automatically implemented - zero-sized struct is always thread-safe

impl Copy for StdSink {}

impl PartialEq for StdSink {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdSink {}

impl std::hash::Hash for StdSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdSink {
    fn write_line(&self, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            lock.write_all(line.as_bytes())
                .expect("Can't write to stdout");
            lock.write_all(b"\n").expect("Can't write to stdout");
        }
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
        }
    }

    fn write_error_line(&self, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stderr().lock();
            lock.write_all(line.as_bytes())
                .expect("Can't write to stderr");
            lock.write_all(b"\n").expect("Can't write to stderr");
        }
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(line));
        }
    }
}
