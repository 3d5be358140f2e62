//! Startup error taxonomy.

use std::path::PathBuf;

/// Result alias that carries [`StarryError`].
pub type Result<T> = std::result::Result<T, StarryError>;

/// Errors raised while acquiring platform resources at startup.
#[derive(Debug, thiserror::Error)]
pub enum StarryError {
    /// A platform subsystem (event loop, GPU adapter, audio output) failed to start.
    #[error("failed to initialize {subsystem}: {reason}")]
    Initialization {
        subsystem: &'static str,
        reason: String,
    },

    /// A window, surface or stream could not be created.
    #[error("failed to create {resource}: {reason}")]
    ResourceCreation {
        resource: &'static str,
        reason: String,
    },

    /// The audio asset is missing, malformed or empty.
    #[error("failed to load audio asset {}: {reason}", .path.display())]
    AssetLoad { path: PathBuf, reason: String },
}

impl StarryError {
    pub fn init(subsystem: &'static str, reason: impl ToString) -> Self {
        Self::Initialization {
            subsystem,
            reason: reason.to_string(),
        }
    }

    pub fn resource(resource: &'static str, reason: impl ToString) -> Self {
        Self::ResourceCreation {
            resource,
            reason: reason.to_string(),
        }
    }

    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_piece() {
        let err = StarryError::init("audio output", "no device");
        assert_eq!(err.to_string(), "failed to initialize audio output: no device");

        let err = StarryError::resource("window", "display unavailable");
        assert_eq!(err.to_string(), "failed to create window: display unavailable");

        let err = StarryError::asset("assets/missing.wav", "not found");
        assert!(err.to_string().contains("assets/missing.wav"));
        assert!(err.to_string().ends_with("not found"));
    }
}
