//! Request extractors whose rejections use the JSON error format.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies and, for JSON,
//! a mix of 400/415/422. These wrappers funnel every decode failure into
//! [`AppError::BadRequest`] so clients always get a 400 with the usual
//! `{ "error", "code" }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Any rejection becomes a 400.
///
/// ```ignore
/// async fn create(ApiJson(input): ApiJson<CreateWorkout>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters. A value that fails to parse (e.g. `/workouts/abc`)
/// becomes a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
