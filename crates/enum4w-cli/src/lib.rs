//! # enum4w-cli
//!
//! Command-line front end for `enum4w-core`.
//!
//! ## Features
//!
//! - **Users**: accounts outside the distribution defaults, `-c 2` adds the defaults
//! - **Processes**: top 10 by CPU and by resident memory
//! - **Root entries**: anything unusual under `/`, container markers
//! - **Homes**: credential directories under `/home/*` and `/root`
//! - **Keys**: readable private keys inside those directories
//! - **Readable files**: a one-shot `find / -readable` cache

pub mod cli;
pub mod output;

pub use cli::run;
