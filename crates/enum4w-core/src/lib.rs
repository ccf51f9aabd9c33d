//! # enum4w-core
//!
//! Local Linux enumeration for privilege-escalation reconnaissance.
//!
//! Every check is a single pass: query the system, filter the result against
//! a compiled-in baseline, hand back a typed classification. Nothing here
//! prints; rendering belongs to the binary.
//!
//! ## Run Order
//!
//! ```text
//! enumerate_users()          /etc/passwd -> primary / secondary accounts
//! top_process_table() x2     /proc (or ps) -> top 10 by CPU, by memory
//! scan_root()                / -> interesting / uncommon entries
//! detect_environment()       / -> containerized?
//! analyze_home_dirs()        /home/*, /root -> credential directories
//! scan_credential_dirs()     credential directories -> private keys
//! cache_readable_files()     find / -readable -> file list
//! ```
//!
//! Results flow forward through [`Findings`]; the credential directory list
//! is passed straight from the home analyzer to the key scanner.

pub mod baseline;
pub mod config;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod exec;
pub mod findings;
pub mod types;

pub use config::ScanConfig;
pub use error::{EnumError, Result};
pub use findings::Findings;
pub use types::*;
