pub mod auth;
pub mod health;
pub mod user;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
///
/// /users                         register (public)
///
/// /workouts                      create (requires auth)
/// /workouts/{id}                 get (public), update, delete (owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/workouts", workout::router())
}
