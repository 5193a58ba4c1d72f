#![forbid(unsafe_code)]

//! Crate-wide error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by store access, hotword operations, and configuration
#[derive(Debug, Error)]
pub enum Error {
    #[error("store file not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    #[error("store file is corrupt: {reason}")]
    Corrupt { reason: String },

    #[error("key not present in store: {0}")]
    KeyMissing(String),

    #[error("no hotword with trigger '{0}'")]
    HotwordNotFound(String),

    #[error("invalid import document: {0}")]
    InvalidImport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a corruption error with a human-readable reason
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Error::Corrupt {
            reason: reason.into(),
        }
    }
}
