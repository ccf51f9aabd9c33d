//! Findings carried between checks during one run.

use std::path::PathBuf;

use crate::types::PrivateKeyHit;

/// Discoveries collected over a run.
///
/// Owned by the run loop. Each check fills its own field and later checks
/// receive what they need as arguments, never through shared state.
#[derive(Debug, Clone, Default)]
pub struct Findings {
    /// Set once the environment classifier ran
    pub containerized: Option<bool>,
    /// Credential directories from the home analyzer
    pub credential_dirs: Vec<PathBuf>,
    /// Keys from the key scanner
    pub private_keys: Vec<PrivateKeyHit>,
    /// Output of the readable-file scan
    pub readable_files: Vec<String>,
}

impl Findings {
    /// Create an empty set of findings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Short summary for the debug log.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "containerized={:?} credential_dirs={} private_keys={} readable_files={}",
            self.containerized,
            self.credential_dirs.len(),
            self.private_keys.len(),
            self.readable_files.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let findings = Findings::new();
        assert_eq!(findings.containerized, None);
        assert!(findings.credential_dirs.is_empty());
        assert_eq!(
            findings.summary(),
            "containerized=None credential_dirs=0 private_keys=0 readable_files=0"
        );
    }
}
