//! Shared domain primitives for the fitlog workspace.
//!
//! Holds the id/timestamp aliases, the domain error type, and the pure
//! validation rules for workouts. Nothing here touches the database or HTTP.

pub mod error;
pub mod types;
pub mod workout;
