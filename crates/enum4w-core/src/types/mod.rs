//! Core types for the enumeration checks.

pub mod environment;
pub mod home;
pub mod keys;
pub mod process;
pub mod root;
pub mod users;
pub mod verbosity;

pub use environment::EnvironmentFacts;
pub use home::{CredentialDir, HomeScan};
pub use keys::{KeyKind, KeyScan, KeyScanEvent, PrivateKeyHit};
pub use process::{ProcessOrder, ProcessRow, ProcessSource, ProcessTable};
pub use root::RootScan;
pub use users::{PasswdEntry, UserListing};
pub use verbosity::Verbosity;
