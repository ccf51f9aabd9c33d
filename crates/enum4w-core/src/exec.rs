//! Shell command execution.

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{EnumError, Result};

/// Run `command` through `sh -c` and return its standard output as text.
///
/// The output is returned untouched, whatever the exit status. Standard error
/// is captured and only logged.
///
/// # Errors
///
/// Returns `EnumError::Spawn` if the shell cannot be started.
pub async fn run_shell(command: &str) -> Result<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| EnumError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        debug!(command, status = %output.status, "command exited unsuccessfully");
    }
    if !output.stderr.is_empty() {
        debug!(
            command,
            stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
            "command wrote to stderr"
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run `command` and split its output into lines, yielding nothing on failure.
pub async fn run_shell_lines(command: &str) -> Vec<String> {
    match run_shell(command).await {
        Ok(out) => out.lines().map(str::to_string).collect(),
        Err(e) => {
            debug!(error = %e, "treating command output as empty");
            Vec::new()
        }
    }
}
