//! Filesystem root listing and classification.

use std::path::Path;
use tracing::warn;

use super::{file_name_of, list_dir};
use crate::baseline::{is_expected_root_entry, is_interesting_root_entry};
use crate::error::Result;
use crate::types::RootScan;

/// Names of the entries directly under `root`.
///
/// # Errors
///
/// Returns `EnumError::Io` if `root` cannot be listed.
pub fn list_root_entries(root: &Path) -> Result<Vec<String>> {
    Ok(list_dir(root)?.iter().map(|p| file_name_of(p)).collect())
}

/// Partition root entries into interesting and uncommon ones.
///
/// Interesting wins over uncommon; expected entries are dropped. Matching
/// ignores case.
#[must_use]
pub fn classify_root_entries<S: AsRef<str>>(entries: &[S]) -> RootScan {
    let mut scan = RootScan::default();
    for entry in entries {
        let entry = entry.as_ref();
        if is_interesting_root_entry(entry) {
            scan.interesting.push(entry.to_string());
        } else if !is_expected_root_entry(entry) {
            scan.uncommon.push(entry.to_string());
        }
    }
    scan
}

/// List and classify `root`, yielding an empty scan if it cannot be read.
pub fn scan_root(root: &Path) -> RootScan {
    match list_root_entries(root) {
        Ok(entries) => classify_root_entries(&entries),
        Err(e) => {
            warn!(error = %e, "cannot list filesystem root");
            RootScan::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify() {
        let scan = classify_root_entries(&["usr", ".dockerenv", "backup", "ETC", "lost+found"]);
        assert_eq!(scan.interesting, vec![".dockerenv"]);
        assert_eq!(scan.uncommon, vec!["backup"]);
    }

    #[test]
    fn test_interesting_ignores_case() {
        let scan = classify_root_entries(&[".DOCKERENV"]);
        assert_eq!(scan.interesting, vec![".DOCKERENV"]);
        assert!(scan.uncommon.is_empty());
    }

    #[test]
    fn test_buckets_never_overlap() {
        let entries = ["bin", ".dockerenv", "srv", "data", "snap", "Boot", "swapfile"];
        let scan = classify_root_entries(&entries);
        for e in &scan.interesting {
            assert!(!scan.uncommon.contains(e));
        }
        for expected in ["bin", "srv", "Boot"] {
            assert!(!scan.interesting.iter().any(|e| e == expected));
            assert!(!scan.uncommon.iter().any(|e| e == expected));
        }
        assert_eq!(scan.uncommon, vec!["data", "snap", "swapfile"]);
    }

    #[test]
    fn test_scan_fixture_root() {
        let tmp = TempDir::new().unwrap();
        for dir in ["usr", "etc", "opt", "data"] {
            std::fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        std::fs::write(tmp.path().join(".dockerenv"), "").unwrap();

        let scan = scan_root(tmp.path());
        assert_eq!(scan.interesting, vec![".dockerenv"]);
        assert_eq!(scan.uncommon, vec!["data"]);
    }

    #[test]
    fn test_scan_unreadable_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_root(&tmp.path().join("missing")).is_empty());
    }
}
