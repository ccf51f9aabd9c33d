//! enum4w - local Linux enumeration
//!
//! Lists interesting users, busy processes, odd root entries, credential
//! directories and readable private keys.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    enum4w_cli::run().await
}
