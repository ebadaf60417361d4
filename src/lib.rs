// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config files + constants
pub mod errors;        // error handling
pub mod model;         // data store, observers, images
pub mod observability; // tracing setup + log messages
pub mod traits;        // observer capability
pub mod utils;         // instrumentation + timing

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
