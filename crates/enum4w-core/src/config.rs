//! Paths and limits for a single enumeration run.

use std::path::PathBuf;

/// Configuration for an enumeration run.
///
/// Every path a check touches lives here so a run can be pointed at a
/// fixture tree instead of the live system.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Account database (default: `/etc/passwd`).
    pub passwd_path: PathBuf,

    /// Filesystem root to list (default: `/`).
    pub root_dir: PathBuf,

    /// Directory holding user homes (default: `/home`).
    pub home_base: PathBuf,

    /// Superuser home, included when listable (default: `/root`).
    pub root_home: PathBuf,

    /// How many processes each ranking shows.
    pub top_processes: usize,

    /// Characters kept from each process line before the continuation marker.
    pub line_budget: usize,

    /// Shell command listing every readable file.
    pub readable_files_command: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            passwd_path: PathBuf::from("/etc/passwd"),
            root_dir: PathBuf::from("/"),
            home_base: PathBuf::from("/home"),
            root_home: PathBuf::from("/root"),
            top_processes: default_top_processes(),
            line_budget: default_line_budget(),
            readable_files_command: String::from("find / -readable 2>/dev/null"),
        }
    }
}

const fn default_top_processes() -> usize {
    10
}

const fn default_line_budget() -> usize {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.passwd_path, PathBuf::from("/etc/passwd"));
        assert_eq!(config.root_dir, PathBuf::from("/"));
        assert_eq!(config.home_base, PathBuf::from("/home"));
        assert_eq!(config.root_home, PathBuf::from("/root"));
        assert_eq!(config.top_processes, 10);
        assert_eq!(config.line_budget, 120);
        assert!(config.readable_files_command.starts_with("find / -readable"));
    }
}
