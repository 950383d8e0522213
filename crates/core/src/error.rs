//! Domain error type shared by the repository and HTTP layers.

use crate::types::DbId;

/// Errors raised by domain rules, independent of transport.
///
/// The API crate maps each variant onto an HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated (e.g. a username already taken).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is anonymous or presented an unusable credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing workout.
    pub fn workout_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Workout",
            id,
        }
    }
}
