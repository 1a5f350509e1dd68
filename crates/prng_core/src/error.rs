//! Error types for generator construction.
//!
//! Generator advancement is total: once a generator exists, drawing from it
//! never fails. The only failure mode is a malformed structural parameter at
//! construction time.

use thiserror::Error;

/// Generator construction error.
///
/// # Examples
/// ```
/// use prng_core::{BlumBlumShub, PrngError};
///
/// let err = BlumBlumShub::new(8731, 383, 383).unwrap_err();
/// assert!(matches!(err, PrngError::InvalidParameter { name: "q", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrngError {
    /// A structural parameter violates the generator's preconditions.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl PrngError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, PrngError>;
