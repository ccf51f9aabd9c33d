//! Account discovery from the passwd database.

use std::path::Path;

use crate::baseline::is_default_account;
use crate::error::{EnumError, Result};
use crate::types::{PasswdEntry, UserListing, Verbosity};

/// Parse passwd-format text.
///
/// Blank lines and `#` comments are ignored; the name is the first
/// `:`-separated field and the UID the third.
#[must_use]
pub fn parse_passwd(text: &str) -> Vec<PasswdEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split(':');
            let name = fields.next()?.to_string();
            if name.is_empty() {
                return None;
            }
            let uid = fields.nth(1).and_then(|f| f.parse().ok());
            Some(PasswdEntry { name, uid })
        })
        .collect()
}

/// Split account names into primary and secondary buckets.
///
/// Names not on the default list are primary. Default accounts become
/// secondary when `verbosity` shows them and are dropped otherwise.
/// Both buckets keep input order.
#[must_use]
pub fn classify_accounts<S: AsRef<str>>(names: &[S], verbosity: Verbosity) -> UserListing {
    let mut listing = UserListing::default();
    for name in names {
        let name = name.as_ref();
        if !is_default_account(name) {
            listing.primary.push(name.to_string());
        } else if verbosity.shows_default_accounts() {
            listing.secondary.push(name.to_string());
        }
    }
    listing
}

/// Read the account database at `passwd_path` and classify its accounts.
///
/// # Errors
///
/// Returns `EnumError::Io` if the file cannot be read.
pub async fn enumerate_users(passwd_path: &Path, verbosity: Verbosity) -> Result<UserListing> {
    let text = tokio::fs::read_to_string(passwd_path)
        .await
        .map_err(|e| EnumError::io(passwd_path, e))?;
    let names: Vec<String> = parse_passwd(&text).into_iter().map(|e| e.name).collect();
    Ok(classify_accounts(&names, verbosity))
}
