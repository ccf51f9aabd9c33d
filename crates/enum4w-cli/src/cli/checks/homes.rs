//! `Analyzing user home directories` section.

use colored::Colorize;
use enum4w_core::discovery::{analyze_home_dirs, home_directories};
use enum4w_core::HomeScan;
use std::path::PathBuf;
use tracing::info;

use super::Context;
use crate::output;

/// Print credential directories and return their paths for the key scan.
pub fn execute(ctx: &Context) -> Vec<PathBuf> {
    output::section("Analyzing user home directories");

    let homes = home_directories(&ctx.config.home_base, &ctx.config.root_home);
    let scan = analyze_home_dirs(&homes);
    info!(
        homes = scan.homes_scanned.len(),
        credential_dirs = scan.credential_dirs.len(),
        empty_boring = scan.empty_boring.len(),
        "home directories analyzed"
    );

    println!("{}", render(&scan));
    scan.credential_paths()
}

/// One green line per home holding a credential directory, or `None.`.
fn render(scan: &HomeScan) -> String {
    if scan.credential_dirs.is_empty() {
        return String::from("None.");
    }
    scan.credential_dirs
        .iter()
        .map(|found| {
            format!("Found .ssh directory in {}", found.home.display())
                .green()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum4w_core::CredentialDir;
    use tempfile::TempDir;

    #[test]
    fn test_only_empty_downloads_prints_none() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("home/alice/Downloads")).unwrap();

        let homes = home_directories(&tmp.path().join("home"), &tmp.path().join("root"));
        let scan = analyze_home_dirs(&homes);

        assert_eq!(render(&scan), "None.");
    }

    #[test]
    fn test_render_each_home() {
        colored::control::set_override(false);
        let scan = HomeScan {
            credential_dirs: vec![
                CredentialDir {
                    home: PathBuf::from("/home/bob"),
                    path: PathBuf::from("/home/bob/.ssh"),
                },
                CredentialDir {
                    home: PathBuf::from("/root"),
                    path: PathBuf::from("/root/.ssh"),
                },
            ],
            ..HomeScan::default()
        };
        assert_eq!(
            render(&scan),
            "Found .ssh directory in /home/bob\nFound .ssh directory in /root"
        );
    }
}
