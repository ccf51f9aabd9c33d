//! Environment classification from the root listing.

use std::path::Path;
use tracing::warn;

use crate::baseline::DOCKER_MARKER;
use crate::discovery::list_root_entries;
use crate::types::EnvironmentFacts;

/// Derive environment facts from root entry names.
///
/// The Docker marker must match exactly.
#[must_use]
pub fn classify_environment<S: AsRef<str>>(entries: &[S]) -> EnvironmentFacts {
    EnvironmentFacts {
        containerized: entries.iter().any(|e| e.as_ref() == DOCKER_MARKER),
    }
}

/// List `root` afresh and classify the environment.
pub fn detect_environment(root: &Path) -> EnvironmentFacts {
    match list_root_entries(root) {
        Ok(entries) => classify_environment(&entries),
        Err(e) => {
            warn!(error = %e, "cannot list filesystem root for environment checks");
            EnvironmentFacts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dockerenv_marks_container() {
        let facts = classify_environment(&["bin", ".dockerenv", "usr"]);
        assert!(facts.containerized);
        assert_eq!(facts.inferences(), vec!["Likely a container (Docker)"]);
    }

    #[test]
    fn test_plain_root_is_not_container() {
        let facts = classify_environment(&["bin", "usr", ".DOCKERENV"]);
        assert!(!facts.containerized);
        assert!(facts.inferences().is_empty());
    }

    #[test]
    fn test_detect_from_fixture() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".dockerenv"), "").unwrap();
        assert!(detect_environment(tmp.path()).containerized);
        assert!(!detect_environment(&tmp.path().join("missing")).containerized);
    }
}
