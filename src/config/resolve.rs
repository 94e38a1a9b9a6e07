//! Relative file reference resolution
//!
//! Certificate, key and auth-path fields may be written relative to the file
//! that contains them. They are rewritten per source, before merging, since
//! a merged map no longer records which file each entry came from.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::Config;
use crate::utils::join_normalized;

/// Rewrite every relative file reference in `config` against `source_dir`.
///
/// Covers `client-certificate`, `client-key` and `auth-path` of each user and
/// `certificate-authority` of each cluster. Empty and absolute values are
/// kept as they are.
///
/// References are plain strings, so a `source_dir` that is not valid UTF-8
/// is converted lossily: offending bytes become U+FFFD in the result.
pub fn resolve_paths(mut config: Config, source_dir: &Path) -> Config {
    for auth_info in config.auth_infos.values_mut() {
        resolve_reference(&mut auth_info.client_certificate, source_dir);
        resolve_reference(&mut auth_info.client_key, source_dir);
        resolve_reference(&mut auth_info.auth_path, source_dir);
    }
    for cluster in config.clusters.values_mut() {
        resolve_reference(&mut cluster.certificate_authority, source_dir);
    }
    config
}

fn resolve_reference(value: &mut String, base: &Path) {
    if value.is_empty() || Path::new(value.as_str()).is_absolute() {
        return;
    }
    *value = join_normalized(base, value).to_string_lossy().into_owned();
}

/// Absolute directory containing the config file at `path`.
///
/// Relative paths are anchored at the process working directory.
pub fn source_dir(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(absolute.parent().map(Path::to_path_buf).unwrap_or(absolute))
}
