pub mod api;
pub mod chain;
pub mod config;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use models::{ExecutionResponse, Metadata, ValidatedMetadata};

pub use domain::{
    calculate_feedback_score, create_metadata, prepare_execution,
    DomainError, FixedJitter, Jitter, UniformJitter,
};

pub use config::AppConfig;
