use thiserror::Error;

use crate::{validation::ValidationError, workout::WorkoutId};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("failed to encode workouts: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode stored workouts: {0}")]
    Decode(String),
    #[error("workout {0} already exists")]
    DuplicateId(WorkoutId),
    #[error("no workout with id {0}")]
    UnknownWorkout(WorkoutId),
    #[error("the workout form is not open")]
    FormClosed,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
