//! System discovery: accounts, processes, root entries, homes, keys, readable files.

pub mod homes;
pub mod keys;
pub mod processes;
pub mod readable;
pub mod root;
pub mod users;

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{EnumError, Result};

pub use homes::{analyze_home_dirs, home_directories};
pub use keys::{detect_key_kind, scan_credential_dirs};
pub use processes::{snapshot_processes, top_process_table, uid_names};
pub use readable::cache_readable_files;
pub use root::{classify_root_entries, list_root_entries, scan_root};
pub use users::{classify_accounts, enumerate_users, parse_passwd};

/// List the immediate children of `path`, sorted by name.
///
/// # Errors
///
/// Returns `EnumError::Io` if `path` itself cannot be listed. Unreadable
/// children are skipped.
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>> {
    // WalkDir reports an unreadable top directory lazily, so probe it first.
    std::fs::read_dir(path).map_err(|e| EnumError::io(path, e))?;

    let mut children = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        match entry {
            Ok(e) => children.push(e.into_path()),
            Err(e) => debug!(path = %path.display(), error = %e, "skipping entry"),
        }
    }
    Ok(children)
}

/// Returns true if `path` is a directory the current user can list.
#[must_use]
pub fn is_listable(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok()
}

/// Returns true if `path` is a directory with no children.
///
/// # Errors
///
/// Returns `EnumError::Io` if `path` cannot be listed.
pub fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(path).map_err(|e| EnumError::io(path, e))?;
    Ok(entries.next().is_none())
}

/// Final path component as text.
pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
