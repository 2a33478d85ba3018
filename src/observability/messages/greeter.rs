// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeter announcement events.
//!
//! This module contains message types for logging events related to:
//! * Announcement lifecycle (start, completion)
//! * Output sizing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Announcement started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_greeter::observability::messages::greeter::AnnouncementStarted;
///
/// let msg = AnnouncementStarted { message_len: 13 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct AnnouncementStarted {
    pub message_len: usize,
}

impl Display for AnnouncementStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Announcement started: message_len={} bytes",
            self.message_len
        )
    }
}

impl StructuredLog for AnnouncementStarted {
    fn log(&self) {
        tracing::info!(message_len = self.message_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "announcement",
            span_name = name,
            message_len = self.message_len,
        )
    }
}

/// Announcement completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_greeter::observability::messages::greeter::AnnouncementCompleted;
/// use std::time::Duration;
///
/// let msg = AnnouncementCompleted {
///     message_len: 13,
///     bytes_written: 14,
///     duration: Duration::from_micros(10),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct AnnouncementCompleted {
    pub message_len: usize,
    pub bytes_written: usize,
    pub duration: std::time::Duration,
}

impl Display for AnnouncementCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Announcement completed: message={} bytes, written={} bytes, duration={:?}",
            self.message_len, self.bytes_written, self.duration
        )
    }
}

impl StructuredLog for AnnouncementCompleted {
    fn log(&self) {
        tracing::info!(
            message_len = self.message_len,
            bytes_written = self.bytes_written,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "announcement_completed",
            span_name = name,
            message_len = self.message_len,
            bytes_written = self.bytes_written,
            duration = ?self.duration,
        )
    }
}
