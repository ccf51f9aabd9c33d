//! Readable file cache.

use colored::Colorize;
use enum4w_core::discovery::cache_readable_files;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::Context;

pub async fn execute(ctx: &Context) -> Vec<String> {
    println!();
    println!(
        "{}",
        "Caching all readable files in system.\nBe patient this could take awhile...".white()
    );

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {elapsed} scanning /") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));

    let files = cache_readable_files(&ctx.config.readable_files_command).await;

    spinner.finish_and_clear();
    println!("{}", "Done. Won't have to do that again!".green());
    files
}
