//! Error types for the Seaworthy simulation.
//!
//! Only construction-time and I/O paths are fallible; the per-step
//! simulation never returns an error.

use thiserror::Error;

/// Unified error type for the Seaworthy simulation.
#[derive(Debug, Error)]
pub enum SeaworthyError {
    /// Structure layer is malformed or produces an unusable ship.
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// Material parameter is out of valid range.
    #[error("Invalid material parameter: {0}")]
    InvalidMaterial(String),

    /// A material name could not be resolved in the database.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SeaworthyError>`.
pub type SeaworthyResult<T> = Result<T, SeaworthyError>;
