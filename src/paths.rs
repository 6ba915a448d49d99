//! Path normalization utilities
//!
//! Resource paths inside a project tree always use '/' as separator,
//! independent of the host platform. These helpers convert between that
//! form and OS-native paths.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Normalize a '/'-or-'\\'-separated string to the '/' form
pub fn normalize_str(path: &str) -> String {
    path.replace('\\', "/")
}

/// Make a path relative to the root directory, in normalized form
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Join a '/'-separated relative resource path onto an OS-native root
pub fn join_relative(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.replace('/', std::path::MAIN_SEPARATOR_STR))
}
