//! `Finding SSH keys` section.

use colored::Colorize;
use enum4w_core::discovery::scan_credential_dirs;
use enum4w_core::{KeyScan, KeyScanEvent, PrivateKeyHit};
use std::path::PathBuf;

use crate::output;

/// Scan the credential directories found earlier and print each readable key.
pub async fn execute(credential_dirs: &[PathBuf]) -> Vec<PrivateKeyHit> {
    output::section("Finding SSH keys");

    let scan = scan_credential_dirs(credential_dirs).await;
    println!("{}", render(&scan));

    scan.hits().cloned().collect()
}

/// One line per event in scan order, with a closing notice when no key turned up.
fn render(scan: &KeyScan) -> String {
    let mut lines: Vec<String> = scan
        .events
        .iter()
        .map(|event| match event {
            KeyScanEvent::Found(hit) => {
                format!("Found SSH Private Key in {} Readable!!", hit.path.display())
                    .green()
                    .to_string()
            }
            KeyScanEvent::Unreadable(_) => String::from("Can't read file."),
        })
        .collect();
    if !scan.found_any() {
        lines.push(String::from("No keys found."));
    }
    lines.join("\n")
}
