// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::time::Instant;

use crate::observability::messages::{greeter::*, StructuredLog};

#[cfg(test)]
mod tests;

/// Greeter - holds a message and announces it on standard output
pub struct Greeter {
    message: String,
}

impl Greeter {
    /// Create a Greeter holding `message` exactly as supplied.
    ///
    /// Any string is accepted, including the empty string. No trimming,
    /// escaping, or validation is performed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The stored message, byte-for-byte equal to the constructor input.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Write the message plus one `\n` to `out`.
    ///
    /// This is the seam `announce` goes through; tests capture output by
    /// passing a `Vec<u8>` here instead of standard output.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.message)
    }

    /// Announce the message on standard output.
    ///
    /// Emits exactly the stored message followed by a single line
    /// terminator, nothing else. Calling this repeatedly produces the
    /// same output each time.
    pub fn announce(&self) {
        let start_msg = AnnouncementStarted {
            message_len: self.message.len(),
        };

        let span = start_msg.span("announce");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let stdout = io::stdout();
        if let Err(e) = self.write_to(stdout.lock()) {
            // No recovery path exists for a dead stdout; abort the same
            // way println! would.
            panic!("failed printing to stdout: {e}");
        }

        AnnouncementCompleted {
            message_len: self.message.len(),
            bytes_written: self.message.len() + 1,
            duration: start_time.elapsed(),
        }
        .log();
    }
}
