//! CLI argument parsing and the enumeration run.

pub mod args;
pub mod checks;

use anyhow::Result;
use args::{Cli, LevelRequest};
use clap::Parser;
use enum4w_core::discovery::uid_names;
use enum4w_core::{Findings, ProcessOrder, ScanConfig, Verbosity};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::output;

/// Usage hint printed when `-c` has no value.
pub const LEVEL_USAGE: &str = "Specify enum level [ 1-4 ]";

/// Install the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::configure_colors(cli.no_color);
    output::print_banner();

    let level = match cli.level_request() {
        LevelRequest::Level(level) => level,
        LevelRequest::Missing => {
            println!("{LEVEL_USAGE}");
            return Ok(());
        }
    };

    let ctx = checks::Context {
        config: ScanConfig::default(),
        verbosity: Verbosity::new(level),
        skip_cache: cli.skip_cache,
    };

    let findings = enumerate(&ctx).await;
    debug!(findings = %findings.summary(), "run complete");
    Ok(())
}

/// Run every check in order, threading findings forward.
pub async fn enumerate(ctx: &checks::Context) -> Findings {
    let mut findings = Findings::new();

    if ctx.verbosity.shows_users() {
        checks::users::execute(ctx).await;
    }
    let uid_map = uid_names(&ctx.config.passwd_path).await;
    checks::processes::execute(ctx, ProcessOrder::Cpu, &uid_map).await;
    checks::processes::execute(ctx, ProcessOrder::Memory, &uid_map).await;
    checks::root::execute(ctx);
    findings.containerized = Some(checks::environment::execute(ctx).containerized);
    findings.credential_dirs = checks::homes::execute(ctx);
    findings.private_keys = checks::keys::execute(&findings.credential_dirs).await;
    if ctx.skip_cache {
        debug!("readable file cache skipped");
    } else {
        findings.readable_files = checks::cache::execute(ctx).await;
    }

    findings
}
