//! `Users in /etc/passwd` section.

use colored::Colorize;
use enum4w_core::discovery::enumerate_users;
use enum4w_core::UserListing;
use tracing::warn;

use super::Context;
use crate::output;

pub async fn execute(ctx: &Context) {
    output::section("Users in /etc/passwd: ");

    let listing = match enumerate_users(&ctx.config.passwd_path, ctx.verbosity).await {
        Ok(listing) => listing,
        Err(e) => {
            warn!(error = %e, "cannot enumerate users");
            UserListing::default()
        }
    };

    if !listing.is_empty() {
        println!("{}", output::listing(&render(&listing)));
    }
}

/// Primary accounts in green, then secondary ones in blue.
fn render(listing: &UserListing) -> Vec<String> {
    listing
        .primary
        .iter()
        .map(|u| u.green().to_string())
        .chain(listing.secondary.iter().map(|u| u.blue().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_bucket_order() {
        colored::control::set_override(false);
        let listing = UserListing {
            primary: vec!["root".into(), "alice".into()],
            secondary: vec!["daemon".into()],
        };
        assert_eq!(render(&listing), vec!["root", "alice", "daemon"]);
    }
}
