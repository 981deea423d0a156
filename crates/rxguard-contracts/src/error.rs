//! Error types for the RXGUARD checking pipeline.
//!
//! All fallible operations return `RxResult<T>`. Finding no interactions is
//! never an error; it is an `Ok` result with empty lists.

use thiserror::Error;

/// The unified error type for RXGUARD.
#[derive(Debug, Error)]
pub enum RxError {
    /// The caller passed a malformed request (blank names, non-string entries,
    /// null where a list is required).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The reference-data collaborator failed or could not be reached.
    ///
    /// The whole check is abandoned; callers must not treat this as "no
    /// interactions found".
    #[error("reference lookup unavailable: {reason}")]
    LookupUnavailable { reason: String },

    /// A dataset, policy, or request file is missing, unreadable, or
    /// malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The check log could not persist a check record.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A result could not be serialized or written for the caller.
    #[error("output failed: {reason}")]
    OutputFailed { reason: String },
}

/// Convenience alias used throughout the RXGUARD crates.
pub type RxResult<T> = Result<T, RxError>;
