//! Workout validation rules.
//!
//! Pure checks applied to the complete desired state of a workout before it
//! is written. The `workout_entries` table enforces the reps/duration rule a
//! second time with a CHECK constraint.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for a workout title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for an exercise name (characters).
pub const MAX_EXERCISE_NAME_LENGTH: usize = 200;

/// Maximum number of entries a single workout may carry.
pub const MAX_ENTRIES: usize = 200;

// ---------------------------------------------------------------------------
// Entry view
// ---------------------------------------------------------------------------

/// Borrowed view of the fields of one workout entry that validation inspects.
#[derive(Debug, Clone, Copy)]
pub struct EntryShape<'a> {
    pub exercise_name: &'a str,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub order_index: i32,
}

// ---------------------------------------------------------------------------
// Header rules
// ---------------------------------------------------------------------------

/// Validate a workout title: non-blank and within [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate that a counter such as `duration_minutes` is not negative.
pub fn validate_non_negative(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry rules
// ---------------------------------------------------------------------------

/// Validate a single entry. `position` is its index in the submitted list and
/// only appears in error messages.
///
/// An entry is either rep-based or timed: exactly one of `reps` and
/// `duration_seconds` must be present.
pub fn validate_entry(position: usize, entry: &EntryShape<'_>) -> Result<(), CoreError> {
    let fail = |msg: String| Err(CoreError::Validation(format!("entries[{position}]: {msg}")));

    if entry.exercise_name.trim().is_empty() {
        return fail("exercise_name must not be empty".into());
    }
    if entry.exercise_name.chars().count() > MAX_EXERCISE_NAME_LENGTH {
        return fail(format!(
            "exercise_name exceeds maximum length of {MAX_EXERCISE_NAME_LENGTH} characters"
        ));
    }
    if entry.sets < 1 {
        return fail(format!("sets must be at least 1 (got {})", entry.sets));
    }

    match (entry.reps, entry.duration_seconds) {
        (Some(_), Some(_)) => {
            return fail("reps and duration_seconds are mutually exclusive".into());
        }
        (None, None) => {
            return fail("one of reps or duration_seconds is required".into());
        }
        (Some(reps), None) if reps < 1 => {
            return fail(format!("reps must be at least 1 (got {reps})"));
        }
        (None, Some(secs)) if secs < 1 => {
            return fail(format!("duration_seconds must be at least 1 (got {secs})"));
        }
        _ => {}
    }

    if let Some(weight) = entry.weight {
        if !weight.is_finite() || weight < 0.0 {
            return fail(format!("weight must be a non-negative number (got {weight})"));
        }
    }
    if entry.order_index < 0 {
        return fail(format!(
            "order_index must not be negative (got {})",
            entry.order_index
        ));
    }
    Ok(())
}

/// Validate a whole entry list.
pub fn validate_entries<'a, I>(entries: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = EntryShape<'a>>,
{
    let mut count = 0usize;
    for (position, entry) in entries.into_iter().enumerate() {
        validate_entry(position, &entry)?;
        count += 1;
    }
    if count > MAX_ENTRIES {
        return Err(CoreError::Validation(format!(
            "A workout may contain at most {MAX_ENTRIES} entries (got {count})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
