//! Home directory scan result.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// A credential directory found inside a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialDir {
    /// Home directory it was found in
    pub home: PathBuf,
    /// Full path of the credential directory
    pub path: PathBuf,
}

/// Everything the home directory analyzer collected.
#[derive(Debug, Clone, Default)]
pub struct HomeScan {
    /// Homes that could be listed
    pub homes_scanned: Vec<PathBuf>,
    /// Credential directories, in discovery order
    pub credential_dirs: Vec<CredentialDir>,
    /// Boring folders confirmed empty and dropped
    pub empty_boring: Vec<PathBuf>,
    /// Remaining children per home, not reported yet
    pub other_entries: BTreeMap<PathBuf, Vec<PathBuf>>,
}

impl HomeScan {
    /// Credential directory paths, ready for the key scanner.
    #[must_use]
    pub fn credential_paths(&self) -> Vec<PathBuf> {
        self.credential_dirs.iter().map(|c| c.path.clone()).collect()
    }
}
