//! Route definitions for the `/workouts` resource.
//!
//! Mounted at `/workouts` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Workout routes.
///
/// ```text
/// POST   /          -> create (requires auth)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (owner only)
/// DELETE /{id}      -> delete (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(workout::create)).route(
        "/{id}",
        get(workout::get_by_id)
            .put(workout::update)
            .delete(workout::delete),
    )
}
