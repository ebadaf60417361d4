// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ready-made application state subscribers.

use std::rc::{Rc, Weak};

use crate::model::DataStore;
use crate::observability::messages::store::AppStateSnapshot;
use crate::observability::messages::StructuredLog;
use crate::traits::AppStateObserver;

/// Logs both flags every time the application state changes.
///
/// Holds a weak handle so it does not keep the store alive; once the store is
/// gone, notifications are ignored.
pub struct StateLogger {
    name: String,
    store: Weak<DataStore>,
}

impl StateLogger {
    pub fn new(name: impl Into<String>, store: &Rc<DataStore>) -> Self {
        Self {
            name: name.into(),
            store: Rc::downgrade(store),
        }
    }
}

impl AppStateObserver for StateLogger {
    fn update_according_to_app_state(&self) {
        if let Some(store) = self.store.upgrade() {
            AppStateSnapshot {
                observer: &self.name,
                scan_in_progress: store.scan_in_progress(),
                web_server_is_running: store.web_server_is_running(),
            }
            .log();
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Runs a closure on every application state change.
pub struct CallbackObserver<F>
where
    F: Fn(),
{
    name: String,
    callback: F,
}

impl<F> CallbackObserver<F>
where
    F: Fn(),
{
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> AppStateObserver for CallbackObserver<F>
where
    F: Fn(),
{
    fn update_according_to_app_state(&self) {
        (self.callback)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
