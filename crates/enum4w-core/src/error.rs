use thiserror::Error;

/// Result type alias for enumeration checks
pub type Result<T> = std::result::Result<T, EnumError>;

/// Errors that can occur while querying the local system
#[derive(Error, Debug)]
pub enum EnumError {
    /// A file or directory could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A shell command could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command line handed to the shell
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `/proc` could not be read
    #[error("procfs error: {0}")]
    Procfs(String),
}

impl EnumError {
    /// Build an `Io` error for the given path.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Returns true if the error is a permission problem rather than a missing path
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Io { source, .. } | Self::Spawn { source, .. } => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            Self::Procfs(_) => false,
        }
    }
}
