//! Error types for narrative generation.

use thiserror::Error;

/// Failures of the external narrative service.
///
/// These never propagate past [`crate::narrative_for`]; the caller always
/// receives text, generated or fallback.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// Service could not be reached or refused the request.
    #[error("narrative service unavailable: {reason}")]
    Unavailable { reason: String },

    /// Service did not answer within the implementation's deadline.
    #[error("narrative service timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Service answered with something other than usable text.
    #[error("narrative service returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

/// Result type for narrative generation.
pub type Result<T> = std::result::Result<T, NarrativeError>;
