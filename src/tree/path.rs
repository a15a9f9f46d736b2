//! Root path resolution

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and lexically clean it.
///
/// `.` components and redundant or trailing separators disappear, `..`
/// pops the previous component. Symlinks are not resolved.
pub fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Name shown for the root node: the last path component.
///
/// A filesystem root has no final component and is named after itself.
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
