// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Reacts to changes of the application state held by a
/// [`DataStore`](crate::model::DataStore).
///
/// The store calls [`update_according_to_app_state`](Self::update_according_to_app_state)
/// after every flag write, without arguments. Implementors keep their own
/// handle on the store and re-read the fields they care about.
pub trait AppStateObserver {
    fn update_according_to_app_state(&self);

    fn name(&self) -> &str {
        "anonymous"
    }
}
