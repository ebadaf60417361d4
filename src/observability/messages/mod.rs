// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself at its documented level with its fields
//! attached as `tracing` fields.
//!
//! # Organization
//!
//! * `store` - Application state changes and observer registration
//! * `timing` - Durations of timed operations
//!
//! # Usage Pattern
//!
//! ```rust
//! use als_core::observability::messages::store::AppStateChanged;
//!
//! let msg = AppStateChanged {
//!     flag: "scan_in_progress",
//!     value: true,
//!     observer_count: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod store;
pub mod timing;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its documented level.
    fn log(&self);

    /// Open a span carrying the message fields.
    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("als", span_name = name)
    }
}
