//! Error types

use thiserror::Error;

/// Errors raised by the harness, the capability check and config loading
#[derive(Debug, Error)]
pub enum BenchError {
    /// The harness needs at least one kernel call to report a result
    #[error("iteration count must be positive, got 0")]
    ZeroIterations,

    #[error("CPU does not support required instruction set: {feature}")]
    UnsupportedCpu { feature: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
