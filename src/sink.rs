//SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/**
The destination of formatted lines.

A sink has two channels, the normal output stream and the error stream.  Each call receives
exactly one line without a terminator; framing is the sink's business.

Sinks are not expected to fail.  If one cannot write, it may panic, and the panic reaches
whoever called the logger.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Writes a line to the normal output channel.
    */
    fn write_line(&self, line: &str);

    /**
    Writes a line to the error channel.
    */
    fn write_error_line(&self, line: &str);
}

/// Which of the two sink channels a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// [`Sink::write_line`]
    Output,
    /// [`Sink::write_error_line`]
    Error,
}

impl Channel {
    pub fn write(self, sink: &dyn Sink, line: &str) {
        match self {
            Channel::Output => sink.write_line(line),
            Channel::Error => sink.write_error_line(line),
        }
    }
}

/*
Boilerplate notes.

# Sink

Clone makes no sense for a trait object, and sinks often own a unique resource anyway.
PartialEq/Eq: unclear whether we'd mean data equality or provenance.  Not implemented.
Default is not necessarily sensible since who knows how the sink is constructed.
Send/Sync are required so a logger can move between threads and sit behind the `log` bridge.

# Channel

Copy, Eq, Hash: a two-valued tag, all trivially sensible.
Ord makes no sense.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;

    #[test]
    fn channel_selects_stream() {
        let sink = InMemorySink::new();
        Channel::Output.write(&sink, "to out");
        Channel::Error.write(&sink, "to err");
        assert_eq!(sink.out_lines(), vec!["to out"]);
        assert_eq!(sink.err_lines(), vec!["to err"]);
    }
}
