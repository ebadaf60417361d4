// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod als;
mod config;

pub use als::{AlsError, AlsResult, ErrorDetails};
pub use config::ConfigError;
