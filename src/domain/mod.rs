// Domain layer - request-independent logic with no HTTP concerns
// Handlers validate input here, score it, and build the transaction to return

pub mod execution;
pub mod feedback;
pub mod metadata;
pub mod validation;

use metadata::MetadataError;

// Domain error type - no HTTP concerns
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Client input problem; the message is shown to the caller as-is
    #[error("{0}")]
    Validation(String),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Encoding(e.to_string())
    }
}

// Re-export commonly used types and functions
pub use execution::prepare_execution;
pub use feedback::{calculate_feedback_score, FeedbackSignals, FixedJitter, Jitter, UniformJitter};
pub use metadata::{create_metadata, rating_app_metadata};
pub use validation::{parse_rating, require_param, Rating};
