//! Route Handlers
//!
//! HTTP request handlers for all routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::templates::NotFoundTemplate;

pub mod beer;
pub mod home;
pub mod info;
pub mod recipe;

/// The single not-found outcome: unknown ids and unknown routes both render
/// the 404 page with a 404 status.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate::new("Page Not Found")).into_response()
}

/// Router fallback for unmatched paths.
pub async fn fallback() -> Response {
    not_found()
}
