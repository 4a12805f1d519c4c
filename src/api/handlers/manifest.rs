use axum::{http::HeaderMap, Json};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::utils::base_url_from_headers;
use crate::domain::{create_metadata, rating_app_metadata, DomainError};
use crate::models::ValidatedMetadata;

/// GET /api/rating-app
/// Describes the mini-app and its feedback form to the hosting platform
#[tracing::instrument(skip(headers), fields(endpoint = "manifest"))]
pub async fn manifest_handler(headers: HeaderMap) -> ApiResult<Json<ValidatedMetadata>> {
    let base_url = base_url_from_headers(&headers);
    info!(base_url = %base_url, "Building mini-app metadata");

    let validated = create_metadata(rating_app_metadata(&base_url)).map_err(DomainError::from)?;

    Ok(Json(validated))
}
