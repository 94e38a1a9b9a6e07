//! Path normalization

use std::path::{Component, Path, PathBuf};

/// Lexically clean a path: drop `.` segments and fold `..` into the
/// preceding segment. The filesystem is never consulted, so symlinks are not
/// followed.
///
/// `..` directly under the root stays at the root; leading `..` segments of
/// a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Join `relative` onto `base` and normalize the result.
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    normalize_path(&base.join(relative))
}
