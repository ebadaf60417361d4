// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for application state events.
//!
//! This module contains message types for logging events related to:
//! * Flag changes on the data store
//! * Observer registration and removal
//! * Observer-side snapshots of the application state

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A data store flag was written.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use als_core::observability::messages::store::AppStateChanged;
///
/// let msg = AppStateChanged {
///     flag: "web_server_is_running",
///     value: false,
///     observer_count: 1,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Application state changed: web_server_is_running=false, notifying 1 observer(s)"
/// );
/// ```
pub struct AppStateChanged<'a> {
    pub flag: &'a str,
    pub value: bool,
    pub observer_count: usize,
}

impl Display for AppStateChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Application state changed: {}={}, notifying {} observer(s)",
            self.flag, self.value, self.observer_count
        )
    }
}

impl StructuredLog for AppStateChanged<'_> {
    fn log(&self) {
        tracing::info!(
            flag = self.flag,
            value = self.value,
            observer_count = self.observer_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "app_state_notification",
            span_name = name,
            flag = self.flag,
            value = self.value,
            observer_count = self.observer_count,
        )
    }
}

/// An observer joined or left the data store.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ObserverRegistrationChanged {
    pub registered: bool,
    pub observer_count: usize,
}

impl Display for ObserverRegistrationChanged {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let action = if self.registered { "registered" } else { "removed" };
        write!(
            f,
            "Observer {}: {} observer(s) now registered",
            action, self.observer_count
        )
    }
}

impl StructuredLog for ObserverRegistrationChanged {
    fn log(&self) {
        tracing::debug!(
            registered = self.registered,
            observer_count = self.observer_count,
            "{}", self
        );
    }
}

/// Removal was requested for an observer the store does not know.
///
/// # Log Level
/// `warn!` - The caller receives an error as well
pub struct ObserverNotRegistered {
    pub observer_count: usize,
}

impl Display for ObserverNotRegistered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot remove observer: not among the {} registered observer(s)",
            self.observer_count
        )
    }
}

impl StructuredLog for ObserverNotRegistered {
    fn log(&self) {
        tracing::warn!(observer_count = self.observer_count, "{}", self);
    }
}

/// Full view of the application state, as seen by an observer.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use als_core::observability::messages::store::AppStateSnapshot;
///
/// let msg = AppStateSnapshot {
///     observer: "status_bar",
///     scan_in_progress: true,
///     web_server_is_running: false,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "[status_bar] scan in progress: true, web server running: false"
/// );
/// ```
pub struct AppStateSnapshot<'a> {
    pub observer: &'a str,
    pub scan_in_progress: bool,
    pub web_server_is_running: bool,
}

impl Display for AppStateSnapshot<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] scan in progress: {}, web server running: {}",
            self.observer, self.scan_in_progress, self.web_server_is_running
        )
    }
}

impl StructuredLog for AppStateSnapshot<'_> {
    fn log(&self) {
        tracing::info!(
            observer = self.observer,
            scan_in_progress = self.scan_in_progress,
            web_server_is_running = self.web_server_is_running,
            "{}", self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_message_wording() {
        let added = ObserverRegistrationChanged {
            registered: true,
            observer_count: 3,
        };
        let removed = ObserverRegistrationChanged {
            registered: false,
            observer_count: 2,
        };

        assert_eq!(added.to_string(), "Observer registered: 3 observer(s) now registered");
        assert_eq!(removed.to_string(), "Observer removed: 2 observer(s) now registered");
    }

    #[test]
    fn not_registered_message_wording() {
        let msg = ObserverNotRegistered { observer_count: 0 };
        assert_eq!(
            msg.to_string(),
            "Cannot remove observer: not among the 0 registered observer(s)"
        );
    }
}
