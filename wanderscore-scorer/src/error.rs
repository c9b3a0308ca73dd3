//! Error types raised while loading or validating scoring configuration.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`ScoringConfig`](crate::ScoringConfig).
#[derive(Debug, Error)]
pub enum ScoringConfigError {
    /// Opening or reading the configuration file failed.
    #[error("failed to read scoring configuration at {path}")]
    ReadFile {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file was not valid JSON for a scoring configuration.
    #[error("failed to parse scoring configuration at {path}")]
    Parse {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A configuration value was unusable.
    #[error("scoring configuration field {field} {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Constraint the value broke.
        reason: &'static str,
    },
}
