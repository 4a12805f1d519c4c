// Shared utility functions for API handlers

use axum::http::HeaderMap;

pub const DEFAULT_HOST: &str = "localhost:3000";
pub const DEFAULT_PROTO: &str = "http";

/// Public base URL of this service as seen by the caller, e.g. behind a proxy
pub fn base_url_from_headers(headers: &HeaderMap) -> String {
    let host = headers
        .get("host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or(DEFAULT_HOST);
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or(DEFAULT_PROTO);

    format!("{}://{}", proto, host)
}
