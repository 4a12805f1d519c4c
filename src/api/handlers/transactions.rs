// Endpoints that turn form input into an unsigned contract transaction

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chain::{FeedbackContractCalls, StoreFeedbackCall, UpdateMessageCall, UpdateRatingCall};
use crate::domain::validation::{
    MISSING_FEEDBACK, MISSING_FEEDBACK_AND_RATING, MISSING_RATING,
};
use crate::domain::{calculate_feedback_score, parse_rating, prepare_execution, require_param};
use crate::models::ExecutionResponse;

#[derive(Debug, Default, PartialEq)]
pub struct FeedbackParams {
    pub feedback: Option<String>,
    pub rating: Option<String>,
}

impl FeedbackParams {
    /// Pick the known keys out of decoded query pairs. A repeated key keeps
    /// its first value and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "feedback" => &mut params.feedback,
                "rating" => &mut params.rating,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// POST /api/rating-app?feedback=..&rating=..
/// Scores the feedback and builds a `storeFeedback` transaction
#[tracing::instrument(skip(state, query), fields(endpoint = "store_feedback"))]
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<Json<ExecutionResponse>> {
    let Query(pairs) = query?;
    let params = FeedbackParams::from_pairs(pairs);

    let feedback = require_param(params.feedback.as_deref(), MISSING_FEEDBACK_AND_RATING)?;
    let rating = require_param(params.rating.as_deref(), MISSING_FEEDBACK_AND_RATING)?;
    let rating = parse_rating(rating)?;

    let score = calculate_feedback_score(feedback, rating.value(), state.jitter.as_ref());
    info!(rating = rating.value(), score = score, "Calculated feedback score");

    respond(
        &state,
        StoreFeedbackCall {
            message: feedback.to_string(),
            rating: score,
        },
    )
}

/// POST /api/rating-app/updateMessage?feedback=..
#[tracing::instrument(skip(state, query), fields(endpoint = "update_message"))]
pub async fn update_message_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<Json<ExecutionResponse>> {
    let Query(pairs) = query?;
    let params = FeedbackParams::from_pairs(pairs);

    let feedback = require_param(params.feedback.as_deref(), MISSING_FEEDBACK)?;
    info!(message_len = feedback.len(), "Updating feedback message");

    respond(
        &state,
        UpdateMessageCall {
            new_message: feedback.to_string(),
        },
    )
}

/// POST /api/rating-app/updateRating?rating=..
#[tracing::instrument(skip(state, query), fields(endpoint = "update_rating"))]
pub async fn update_rating_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> ApiResult<Json<ExecutionResponse>> {
    let Query(pairs) = query?;
    let params = FeedbackParams::from_pairs(pairs);

    let rating = require_param(params.rating.as_deref(), MISSING_RATING)?;
    let rating = parse_rating(rating)?.to_whole()?;
    info!(rating = rating, "Updating rating");

    respond(&state, UpdateRatingCall { new_rating: rating })
}

fn respond(
    state: &AppState,
    call: impl Into<FeedbackContractCalls>,
) -> ApiResult<Json<ExecutionResponse>> {
    Ok(Json(prepare_execution(call, &state.chain)?))
}
