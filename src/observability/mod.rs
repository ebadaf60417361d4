// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Two concerns live here:
//!
//! * subscriber installation ([`init_tracing`]), driven by [`LogConfig`]
//! * centralized message types ([`messages`]) implementing `Display` and
//!   [`StructuredLog`](messages::StructuredLog), so log wording is not scattered
//!   through the codebase as magic strings
//!
//! # Usage
//!
//! ```rust,no_run
//! use als_core::config::LogConfig;
//! use als_core::observability::init_tracing;
//!
//! init_tracing(&LogConfig::default()).expect("init logging");
//! tracing::info!("ready");
//! ```
//!
//! `RUST_LOG` overrides the configured level, which also allows per-module
//! filtering of the instrumentation records:
//!
//! ```text
//! RUST_LOG=info,als_core::model::store=debug
//! ```

pub mod messages;

use crate::config::consts::LOGGED_CRATES;
use crate::config::{LogConfig, LogFormat};
use crate::errors::ConfigError;
use std::fs::OpenOptions;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global tracing subscriber described by `config`.
///
/// Records go to stderr, or are appended to `config.log_file` when set.
/// Fails with [`ConfigError::LoggingAlreadyInitialized`] when a global
/// subscriber is already installed; the first one stays in place.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
            init_tracing_with_writer(config, SharedFileWriter::new(file))
        }
        None => init_tracing_with_writer(config, io::stderr),
    }
}

/// Install the global tracing subscriber with a custom writer.
pub fn init_tracing_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), ConfigError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level()?);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            )
            .try_init()?,
        LogFormat::Compact if config.with_timestamps => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init()?,
        LogFormat::Pretty if config.with_timestamps => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init()?,
    }

    Ok(())
}

/// Build an `EnvFilter` from the given level, respecting the `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Our crates follow `level`, everything else stays at warn.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        LOGGED_CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, level)),
    );
    directives.join(",")
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl io::Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Log capture for unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl CapturedLogs {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
        }
    }

    pub(crate) struct CapturedLogsGuard {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl io::Write for CapturedLogsGuard {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogsGuard;

        fn make_writer(&'a self) -> Self::Writer {
            CapturedLogsGuard {
                buffer: Arc::clone(&self.buffer),
            }
        }
    }

    /// Run `f` with a debug-level subscriber scoped to the current thread and
    /// return its result along with everything it logged.
    pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_target(true)
            .without_time()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_cover_our_crates() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,als_core=debug,als=debug"
        );
    }

    #[test]
    fn init_rejects_invalid_level() {
        let config = LogConfig {
            level: "loud".to_string(),
            ..LogConfig::default()
        };

        let err = init_tracing_with_writer(&config, io::sink).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    // The only test installing the process-wide subscriber.
    #[test]
    fn init_appends_to_log_file_and_refuses_a_second_subscriber() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("als.log");
        let config = LogConfig {
            level: "debug".to_string(),
            with_ansi: false,
            log_file: Some(path.clone()),
            ..LogConfig::default()
        };

        init_tracing(&config).unwrap();
        tracing::warn!("first subscriber is live");

        let second = LogConfig {
            log_file: Some(dir.path().join("second.log")),
            ..config.clone()
        };
        let err = init_tracing(&second).unwrap_err();
        assert!(matches!(err, ConfigError::LoggingAlreadyInitialized(_)));

        let logged = std::fs::read_to_string(&path).unwrap();
        assert!(logged.contains("first subscriber is live"));
    }
}
