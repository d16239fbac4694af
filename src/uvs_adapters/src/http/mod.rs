pub mod routes;

use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Raw `Authorization` header, `None` when absent or not valid UTF-8.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION)?.to_str().ok()
}
