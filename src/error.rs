//! Startup error types
//!
//! Only configuration can fail. Once a game is built, every operation is
//! infallible: rejected moves return `false` and idle ticks are no-ops.

use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    /// A row of bricks (including separators) does not fit in the arena
    #[error("brick row needs {needed} units but the arena is only {available} wide")]
    GridTooWide { needed: f32, available: f32 },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
