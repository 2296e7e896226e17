//! Error types for the bridge crate.
//!
//! Errors are designed for layered context using rootcause. Only
//! `Unavailable` takes part in resolution; the other variants come from a
//! bound host misbehaving and are logged, never surfaced to the user.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for bridge errors.
pub type Result<T, C = BridgeError> = std::result::Result<T, Report<C>>;

/// Errors from host bridge operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The host capability is not present in this runtime.
    Unavailable { reason: String },
    /// A host function was present but the call failed.
    HostCall { operation: String, details: String },
    /// A payload could not be encoded for the host.
    Encode { details: String },
}

impl BridgeError {
    /// Shorthand for an [`BridgeError::Unavailable`] with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if this error means the host is absent.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "host capability unavailable: {reason}")
            }
            Self::HostCall { operation, details } => {
                write!(f, "host call '{operation}' failed: {details}")
            }
            Self::Encode { details } => {
                write!(f, "failed to encode payload: {details}")
            }
        }
    }
}

impl std::error::Error for BridgeError {}
