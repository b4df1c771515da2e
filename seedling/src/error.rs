//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::prompt::PromptError;

/// Result alias used throughout the library
pub type Result<T, E = SeedlingError> = std::result::Result<T, E>;

/// Library error type
///
/// File system and manifest errors carry the path they failed on.
#[derive(Debug, Error)]
pub enum SeedlingError {
    /// File system error
    #[error("{action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted (e.g. "failed to copy")
        action: &'static str,
        /// Path the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be parsed or serialized
    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed, but its top level is not an object
    #[error("manifest {} must contain a JSON object", .path.display())]
    ManifestNotObject {
        /// Manifest path
        path: PathBuf,
    },

    /// Interactive prompt failed or was cancelled
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be serialized
    #[error("failed to serialize default configuration: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),
}

impl SeedlingError {
    /// Build an [`SeedlingError::Io`] for `path`
    #[must_use]
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether the user cancelled an interactive prompt
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt(PromptError::Cancelled))
    }
}

impl From<figment::Error> for SeedlingError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = SeedlingError::io(
            "failed to read",
            "/tmp/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("failed to read"));
        assert!(message.contains("/tmp/missing"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_cancelled_detection() {
        assert!(SeedlingError::Prompt(PromptError::Cancelled).is_cancelled());
        assert!(!SeedlingError::Prompt(PromptError::Exhausted).is_cancelled());
    }
}
