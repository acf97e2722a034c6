//! Error types for varjya.

use thiserror::Error;

/// varjya error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule carries a scoping base that is neither empty nor terminated by
    /// a separator. The rule set was populated incorrectly upstream, so
    /// matching refuses to proceed instead of silently reporting a mismatch.
    #[error("invalid rule base {base:?} (pattern at position {position}): a non-empty base must end with '/'")]
    InvalidRuleBase { base: String, position: usize },
}

/// Result type alias for varjya operations.
pub type Result<T> = std::result::Result<T, Error>;
