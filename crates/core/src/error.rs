//! Error types for the badge-colors core.

use thiserror::Error;

/// Errors produced by color parsing and scheme configuration.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex string did not match `#?[0-9a-fA-F]{6}`.
    #[error("malformed hex color: {0}")]
    MalformedHex(String),

    /// A display mode name was not recognized.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A derivation policy name was not recognized.
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),

    /// A scheme configuration failed validation or could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
