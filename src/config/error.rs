//! Loading errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::CodecError;

/// Why a single source file could not contribute to the merged config.
///
/// Every variant names the offending path so the caller can find the file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the configured path.
    #[error("config file '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but could not be read (a directory, permissions, ...).
    #[error("failed to read config file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but are not a valid config document.
    #[error("failed to decode config file '{}': {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

impl LoadError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn decode(path: impl Into<PathBuf>, source: CodecError) -> Self {
        Self::Decode { path: path.into(), source }
    }

    /// The file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Decode { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
