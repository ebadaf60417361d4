// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for timed operations.

use crate::observability::messages::StructuredLog;
use crate::utils::Elapsed;
use std::fmt::{Display, Formatter};

/// A timed operation finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use als_core::observability::messages::timing::OperationTimed;
/// use als_core::utils::Elapsed;
///
/// let msg = OperationTimed {
///     operation: "reading frame light_0001.fit",
///     elapsed: Elapsed::from_millis(12.3456),
/// };
///
/// assert_eq!(msg.to_string(), "Done reading frame light_0001.fit in 12.346 ms");
/// ```
pub struct OperationTimed<'a> {
    pub operation: &'a str,
    pub elapsed: Elapsed,
}

impl Display for OperationTimed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Done {} in {} ms", self.operation, self.elapsed)
    }
}

impl StructuredLog for OperationTimed<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            elapsed_ms = self.elapsed.in_milli(),
            "{}", self
        );
    }
}
