//! Workout aggregate model and DTOs.
//!
//! A [`Workout`] row owns an ordered list of [`WorkoutEntry`] rows. Entries
//! are never written on their own: [`CreateWorkout`] carries the complete
//! desired entry list for both inserts and full replacements.

use fitlog_core::error::CoreError;
use fitlog_core::types::{DbId, Timestamp};
use fitlog_core::workout::{self, EntryShape};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workouts` table plus its attached entries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Loaded by a second query, ascending `order_index`.
    #[sqlx(skip)]
    pub entries: Vec<WorkoutEntry>,
}

/// A row from the `workout_entries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WorkoutEntry {
    pub id: DbId,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

/// DTO for one entry of a created or replaced workout.
///
/// Unknown keys such as an echoed `id` are ignored, so clients can send back
/// entries exactly as they received them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateWorkoutEntry {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub order_index: i32,
}

impl CreateWorkoutEntry {
    pub fn shape(&self) -> EntryShape<'_> {
        EntryShape {
            exercise_name: &self.exercise_name,
            sets: self.sets,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            weight: self.weight,
            order_index: self.order_index,
        }
    }
}

impl From<WorkoutEntry> for CreateWorkoutEntry {
    fn from(entry: WorkoutEntry) -> Self {
        Self {
            exercise_name: entry.exercise_name,
            sets: entry.sets,
            reps: entry.reps,
            duration_seconds: entry.duration_seconds,
            weight: entry.weight,
            notes: entry.notes,
            order_index: entry.order_index,
        }
    }
}

/// DTO for creating a workout, and the full desired state for a replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<CreateWorkoutEntry>,
}

impl CreateWorkout {
    /// Check every header and entry rule in `fitlog_core::workout`.
    pub fn validate(&self) -> Result<(), CoreError> {
        workout::validate_title(&self.title)?;
        workout::validate_non_negative("duration_minutes", self.duration_minutes)?;
        workout::validate_non_negative("calories_burned", self.calories_burned)?;
        workout::validate_entries(self.entries.iter().map(CreateWorkoutEntry::shape))
    }
}

/// DTO for a partial update. Every field is optional; absent (or `null`)
/// fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateWorkout {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    /// When present, replaces the whole entry list. Never merged by index.
    pub entries: Option<Vec<CreateWorkoutEntry>>,
}

impl UpdateWorkout {
    /// Overlay the supplied fields on `existing`, producing the complete state
    /// to hand to `WorkoutRepo::update`.
    pub fn merge_into(self, existing: Workout) -> CreateWorkout {
        CreateWorkout {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            duration_minutes: self.duration_minutes.unwrap_or(existing.duration_minutes),
            calories_burned: self.calories_burned.unwrap_or(existing.calories_burned),
            entries: match self.entries {
                Some(entries) => entries,
                None => existing.entries.into_iter().map(Into::into).collect(),
            },
        }
    }
}
