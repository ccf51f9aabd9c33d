//! Home directory analysis.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::{file_name_of, is_empty_dir, is_listable, list_dir};
use crate::baseline::{BORING_IF_EMPTY, CREDENTIAL_DIRS};
use crate::types::{CredentialDir, HomeScan};

/// How a single home directory child is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildClass {
    /// Boring folder with nothing in it
    EmptyBoring,
    /// Boring folder with content, or one that cannot be listed
    Boring,
    /// Credential directory
    Credential,
    /// Anything else
    Other,
}

fn classify_child(path: &Path) -> ChildClass {
    let name = file_name_of(path);
    if BORING_IF_EMPTY.contains(&name.as_str()) {
        // Something that cannot be listed is not known to be empty.
        if is_empty_dir(path).unwrap_or(false) {
            ChildClass::EmptyBoring
        } else {
            ChildClass::Boring
        }
    } else if CREDENTIAL_DIRS.contains(&name.as_str()) {
        ChildClass::Credential
    } else {
        ChildClass::Other
    }
}

/// Candidate home directories: every entry of `home_base`, then `root_home`
/// if it can be listed.
pub fn home_directories(home_base: &Path, root_home: &Path) -> Vec<PathBuf> {
    let mut homes = match list_dir(home_base) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(error = %e, "no home base to scan");
            Vec::new()
        }
    };

    if is_listable(root_home) {
        homes.push(root_home.to_path_buf());
    }
    homes
}

/// Walk the children of each home directory.
///
/// Homes that cannot be listed are skipped. Empty boring folders are noted in
/// `empty_boring` and go no further, while non-empty ones are not looked into.
/// Credential directories are collected in discovery order and everything
/// else ends up in `other_entries`.
pub fn analyze_home_dirs(homes: &[PathBuf]) -> HomeScan {
    let mut scan = HomeScan::default();

    for home in homes {
        let children = match list_dir(home) {
            Ok(children) => children,
            Err(e) => {
                debug!(error = %e, "skipping home directory");
                continue;
            }
        };
        scan.homes_scanned.push(home.clone());

        let mut others = Vec::new();
        for child in children {
            match classify_child(&child) {
                ChildClass::EmptyBoring => {
                    debug!(path = %child.display(), "empty boring folder");
                    scan.empty_boring.push(child);
                }
                ChildClass::Boring => {
                    debug!(path = %child.display(), "boring folder has content, not descending");
                }
                ChildClass::Credential => scan.credential_dirs.push(CredentialDir {
                    home: home.clone(),
                    path: child,
                }),
                ChildClass::Other => others.push(child),
            }
        }

        debug!(home = %home.display(), count = others.len(), "collected other home entries");
        scan.other_entries.insert(home.clone(), others);
    }

    scan
}
