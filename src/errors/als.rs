// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Base error type for all application failures.
//!
//! Every [`AlsError`] carries a human readable message together with a
//! structured [`ErrorDetails`] payload. Both are mandatory: there is no
//! constructor defaulting either of them.

use std::path::PathBuf;
use thiserror::Error;

/// Structured payload describing what went wrong, one variant per failure kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    /// An observer was removed from the data store without being registered.
    #[error("observer is not registered ({registered} observers currently registered)")]
    ObserverNotFound { registered: usize },

    /// Image data does not have at least a height and a width axis.
    #[error("image data must have at least 2 dimensions, got shape {shape:?}")]
    InvalidImageShape { shape: Vec<usize> },

    /// A folder the session cannot work without does not exist.
    #[error("critical folder is missing: {}", folder.display())]
    CriticalFolderMissing { folder: PathBuf },
}

/// Base error type. Domain failures are distinguished by their [`ErrorDetails`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}: {details}")]
pub struct AlsError {
    message: String,
    details: ErrorDetails,
}

impl AlsError {
    pub fn new(message: impl Into<String>, details: ErrorDetails) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }
}

/// Result type alias for operations failing with an [`AlsError`].
pub type AlsResult<T> = Result<T, AlsError>;
