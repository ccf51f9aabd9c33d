//! `Uncommon files in root` section.

use colored::Colorize;
use enum4w_core::discovery::scan_root;
use enum4w_core::RootScan;

use super::Context;
use crate::output;

pub fn execute(ctx: &Context) {
    output::section("Uncommon files in root: ");
    println!("{}", render(&scan_root(&ctx.config.root_dir)));
}

/// Interesting entries in red directly followed by uncommon ones in green.
fn render(scan: &RootScan) -> String {
    format!(
        "{}{}",
        scan.interesting.join("\t\t").red(),
        scan.uncommon.join("\t\t").green()
    )
}
