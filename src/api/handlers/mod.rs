// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Extract query parameters and headers
// 2. Call domain validation and scoring
// 3. Hand the contract call to the shared execution pipeline
// 4. Transform domain result to HTTP response

pub mod manifest;
pub mod transactions;

pub use manifest::manifest_handler;
pub use transactions::{submit_feedback_handler, update_message_handler, update_rating_handler};
