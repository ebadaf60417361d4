// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for application configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the configuration schema.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file is not valid TOML for the configuration schema.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension maps to no known configuration format.
    #[error("unsupported config file extension for '{}', expected .yaml, .yml or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The configured log level is not one of trace, debug, info, warn or error.
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    /// A global tracing subscriber was installed before this one.
    #[error("logging is already initialized: {0}")]
    LoggingAlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
