//! One-shot listing of every readable file.

use tracing::info;

use crate::exec::run_shell_lines;

/// Run `command` (normally `find / -readable`) and keep every output line.
///
/// This walks the whole filesystem and dominates the run time. A command
/// that cannot be started yields an empty list.
pub async fn cache_readable_files(command: &str) -> Vec<String> {
    let files = run_shell_lines(command).await;
    info!(count = files.len(), "cached readable files");
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_caches_find_output() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "a").unwrap();
        std::fs::write(tmp.path().join("b.txt"), "b").unwrap();

        let cmd = format!("find {} -type f -readable 2>/dev/null | sort", tmp.path().display());
        let files = cache_readable_files(&cmd).await;
        assert_eq!(
            files,
            vec![
                tmp.path().join("a.txt").display().to_string(),
                tmp.path().join("b.txt").display().to_string(),
            ]
        );
    }
}
