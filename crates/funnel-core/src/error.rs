//! # Funnel Error Types
//!
//! Typed error handling for the funnel client.
//! All fallible operations return `Result<T, FunnelError>`.

use crate::lead::ValidationErrors;
use thiserror::Error;

/// Core error type for all funnel operations
#[derive(Debug, Error)]
pub enum FunnelError {
    /// Configuration errors (missing env vars, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local field-level validation failure; never reaches the network
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Network/server failure on a required call
    #[error("Request failed: {0}")]
    Request(String),

    /// Checkout session response carried no redirect URL
    #[error("No checkout URL received")]
    MissingCheckoutUrl,

    /// Payment status polling exhausted its attempt budget
    #[error("Payment status check timed out after {attempts} attempts")]
    PollTimeout { attempts: u32 },

    /// Payment session is no longer valid
    #[error("Payment session expired: {session_id}")]
    SessionExpired { session_id: String },

    /// Polling run was cancelled via the shutdown signal
    #[error("Payment status polling cancelled")]
    PollCancelled,

    /// Another polling run is already active for this session
    #[error("Status poll already in progress for session: {session_id}")]
    PollInProgress { session_id: String },

    /// Lead form already reached its terminal submitted state
    #[error("Lead already submitted")]
    AlreadySubmitted,

    /// Response body could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FunnelError {
    /// Returns true if the caller may retry the same operation later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FunnelError::Request(_) | FunnelError::PollTimeout { .. }
        )
    }

    /// Single generic user-facing message per error class.
    ///
    /// Request failures drop the technical cause; validation errors keep
    /// field detail so the user can correct the form.
    pub fn user_message(&self) -> String {
        match self {
            FunnelError::Validation(errors) => errors.to_string(),
            FunnelError::Request(_) | FunnelError::Serialization(_) => {
                "Something went wrong, please try again".to_string()
            }
            FunnelError::MissingCheckoutUrl => {
                "Could not start checkout, please try again".to_string()
            }
            FunnelError::PollTimeout { .. } => {
                "Payment still pending, check back shortly".to_string()
            }
            FunnelError::SessionExpired { .. } => {
                "This payment link is no longer valid".to_string()
            }
            FunnelError::AlreadySubmitted => "Already submitted".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for funnel operations
pub type FunnelResult<T> = Result<T, FunnelError>;
