//! Handlers for the `/workouts` resource.
//!
//! Reads are public. Creating requires a logged-in user, who becomes the
//! owner; updating and deleting are limited to that owner.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use fitlog_core::error::CoreError;
use fitlog_core::types::DbId;
use fitlog_db::models::workout::{CreateWorkout, UpdateWorkout};
use fitlog_db::repositories::WorkoutRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload returned by `DELETE /workouts/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedWorkout {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// GET /workouts/{id}
// ---------------------------------------------------------------------------

/// Fetch a workout with its entries. A missing workout is a 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let workout = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::workout_not_found(id)))?;

    Ok(Json(DataResponse { data: workout }))
}

// ---------------------------------------------------------------------------
// POST /workouts
// ---------------------------------------------------------------------------

/// Create a workout owned by the caller.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateWorkout>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let workout = WorkoutRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        workout_id = workout.id,
        user_id = auth.user_id,
        entry_count = workout.entries.len(),
        "Workout created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: workout })))
}

// ---------------------------------------------------------------------------
// PUT /workouts/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update. Only fields present in the body change; a present
/// `entries` list replaces every existing entry.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(patch): ApiJson<UpdateWorkout>,
) -> AppResult<impl IntoResponse> {
    let existing = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::workout_not_found(id)))?;
    check_owner(id, existing.user_id, &auth)?;

    let replaces_entries = patch.entries.is_some();
    let desired = patch.merge_into(existing);
    desired.validate()?;

    let workout = WorkoutRepo::update(&state.pool, id, &desired)
        .await?
        .ok_or(AppError::Core(CoreError::workout_not_found(id)))?;

    tracing::info!(
        workout_id = id,
        user_id = auth.user_id,
        replaces_entries,
        entry_count = workout.entries.len(),
        "Workout updated",
    );

    Ok(Json(DataResponse { data: workout }))
}

// ---------------------------------------------------------------------------
// DELETE /workouts/{id}
// ---------------------------------------------------------------------------

/// Delete a workout and its entries.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let owner = WorkoutRepo::find_owner(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::workout_not_found(id)))?;
    check_owner(id, owner, &auth)?;

    if !WorkoutRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::workout_not_found(id)));
    }

    tracing::info!(workout_id = id, user_id = auth.user_id, "Workout deleted");

    Ok(Json(DataResponse {
        data: DeletedWorkout { id },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fail with 403 unless the caller owns the workout.
fn check_owner(id: DbId, owner: DbId, auth: &AuthUser) -> AppResult<()> {
    if owner != auth.user_id {
        tracing::warn!(
            workout_id = id,
            owner_id = owner,
            user_id = auth.user_id,
            "Rejected modification of another user's workout",
        );
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only modify your own workouts".into(),
        )));
    }
    Ok(())
}
