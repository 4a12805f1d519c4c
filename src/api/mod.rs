pub mod cors;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod utils;

pub use state::AppState;

/// Manifest, feedback submission and preflight
pub const RATING_APP_PATH: &str = crate::domain::metadata::FEEDBACK_ACTION_PATH;
pub const UPDATE_MESSAGE_PATH: &str = "/api/rating-app/updateMessage";
pub const UPDATE_RATING_PATH: &str = "/api/rating-app/updateRating";
