//! One module per report section.

pub mod cache;
pub mod environment;
pub mod homes;
pub mod keys;
pub mod processes;
pub mod root;
pub mod users;

use enum4w_core::{ScanConfig, Verbosity};

/// Shared context for all checks.
#[derive(Debug, Clone)]
pub struct Context {
    /// Paths and limits
    pub config: ScanConfig,

    /// Enumeration level from `-c`
    pub verbosity: Verbosity,

    /// Skip the readable file cache
    pub skip_cache: bool,
}
