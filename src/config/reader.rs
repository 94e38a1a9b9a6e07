//! Reading one source file into a snapshot

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::location::Location;
use super::resolve::{resolve_paths, source_dir};
use super::LoadError;
use crate::codec::Decoder;
use crate::domain::Config;

/// Read and decode the config file at `path`.
///
/// Distinguishes a path with nothing behind it ([`LoadError::NotFound`]) from
/// one that exists but cannot be read ([`LoadError::Read`]) or decoded
/// ([`LoadError::Decode`]). Relative file references are left as written.
pub fn read_source(path: &Path, decoder: &dyn Decoder) -> Result<Config, LoadError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(LoadError::not_found(path)),
        Err(e) => return Err(LoadError::read(path, e)),
    };
    if metadata.is_dir() {
        return Err(LoadError::read(path, io::Error::other("is a directory")));
    }

    let bytes = fs::read(path).map_err(|e| LoadError::read(path, e))?;
    decoder.decode(&bytes).map_err(|e| LoadError::decode(path, e))
}

/// One source's contribution: its config with file references already
/// resolved against the directory it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub location: Location,
    /// Path as configured, not canonicalized.
    pub path: PathBuf,
    pub config: Config,
}

impl Snapshot {
    pub fn new(location: Location, path: impl Into<PathBuf>, config: Config) -> Self {
        Self { location, path: path.into(), config }
    }

    /// Read the file at `path` and resolve its relative references.
    pub fn load(location: Location, path: &Path, decoder: &dyn Decoder) -> Result<Self, LoadError> {
        let raw = read_source(path, decoder)?;
        let base = source_dir(path).map_err(|e| LoadError::read(path, e))?;
        Ok(Self::new(location, path, resolve_paths(raw, &base)))
    }
}
