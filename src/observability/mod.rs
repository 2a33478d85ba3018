// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic and
//! operational logging. Message types follow a struct-based pattern with
//! `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Usage
//!
//! ```rust
//! use the_greeter::observability::messages::greeter::AnnouncementStarted;
//!
//! let msg = AnnouncementStarted { message_len: 13 };
//!
//! tracing::info!("{}", msg);
//! ```
//!
//! Log output never goes to standard output: the announced message itself
//! is the only content a Greeter writes there. Binaries route the
//! subscriber to standard error.

pub mod messages;
