//! Repository for the `workouts` aggregate (`workouts` + `workout_entries`).
//!
//! Every write touching both tables runs in a single transaction. A dropped
//! transaction rolls back, so an early `?` return never leaves a header
//! without its entries or a half-replaced entry list.

use fitlog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::workout::{CreateWorkout, CreateWorkoutEntry, Workout, WorkoutEntry};

/// Column list for `workouts` queries.
const COLUMNS: &str = "\
    id, user_id, title, description, duration_minutes, calories_burned, \
    created_at, updated_at";

/// Column list for `workout_entries` queries.
const ENTRY_COLUMNS: &str = "\
    id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index";

/// Provides create/read/replace/delete for workouts and their entries.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a workout owned by `user_id` together with its entries.
    ///
    /// Entries are inserted in the order given and returned in that order,
    /// each with its database-assigned id.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWorkout,
    ) -> Result<Workout, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workouts \
                (user_id, title, description, duration_minutes, calories_burned) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let mut workout = sqlx::query_as::<_, Workout>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(input.calories_burned)
            .fetch_one(&mut *tx)
            .await?;

        workout.entries = insert_entries(&mut *tx, workout.id, &input.entries).await?;

        tx.commit().await?;
        Ok(workout)
    }

    /// Find a workout by ID with its entries in ascending `order_index`.
    ///
    /// A missing workout is `Ok(None)`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1");
        let Some(mut workout) = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM workout_entries \
             WHERE workout_id = $1 \
             ORDER BY order_index, id"
        );
        workout.entries = sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(workout))
    }

    /// Replace a workout's header fields and its entire entry list.
    ///
    /// Existing entries are deleted and `input.entries` re-inserted, so entry
    /// ids change on every call. Returns `None` (and writes nothing) if the
    /// workout does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateWorkout,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE workouts SET \
                title = $1, description = $2, duration_minutes = $3, \
                calories_burned = $4, updated_at = now() \
             WHERE id = $5 \
             RETURNING {COLUMNS}"
        );
        let Some(mut workout) = sqlx::query_as::<_, Workout>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(input.calories_burned)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        workout.entries = insert_entries(&mut *tx, id, &input.entries).await?;

        tx.commit().await?;
        Ok(Some(workout))
    }

    /// Look up the owning user of a workout. `None` if the workout does not exist.
    pub async fn find_owner(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT user_id FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a workout. Its entries go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert `entries` for `workout_id` one by one, preserving input order.
async fn insert_entries(
    conn: &mut PgConnection,
    workout_id: DbId,
    entries: &[CreateWorkoutEntry],
) -> Result<Vec<WorkoutEntry>, sqlx::Error> {
    let query = format!(
        "INSERT INTO workout_entries \
            (workout_id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {ENTRY_COLUMNS}"
    );

    let mut stored = Vec::with_capacity(entries.len());
    for entry in entries {
        let row = sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(workout_id)
            .bind(&entry.exercise_name)
            .bind(entry.sets)
            .bind(entry.reps)
            .bind(entry.duration_seconds)
            .bind(entry.weight)
            .bind(&entry.notes)
            .bind(entry.order_index)
            .fetch_one(&mut *conn)
            .await?;
        stored.push(row);
    }
    Ok(stored)
}
