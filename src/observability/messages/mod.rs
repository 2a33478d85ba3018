// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait for human-readable
//! output and [`StructuredLog`] for emitting `tracing` events with
//! structured fields.

use std::fmt::Display;
use tracing::Span;

pub mod greeter;

/// Emit a message as a structured `tracing` event, or open a span
/// carrying the message's fields.
pub trait StructuredLog: Display {
    /// Log this message at its designated level with structured fields.
    fn log(&self);

    /// Create a span named `name` carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
