//! Training types, constants and errors.
//!
//! Holds the report record produced by every workout, the shared unit
//! constants and the error taxonomy for dispatch and calculation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Stride length for land-based workouts, in meters.
pub const LAND_STEP_M: f64 = 0.65;

/// Stroke length for swimming, in meters.
pub const SWIM_STEP_M: f64 = 1.38;

/// Errors that can occur while dispatching or calculating a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// Workout code is not in the dispatch table.
    #[error("Неизвестный тип тренировки: {0}")]
    UnknownWorkoutType(String),

    /// Number of fields does not match the workout's constructor.
    #[error("Workout {code} expects {expected} fields, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A field did not conform to its declared type.
    #[error("Field {field} must be an integer, got {value}")]
    InvalidField { field: &'static str, value: f64 },

    /// Operation has no implementation for this training.
    #[error("{operation} is not defined for {training}")]
    UnsupportedOperation {
        operation: &'static str,
        training: &'static str,
    },

    /// Division by a zero-valued quantity.
    #[error("Division by zero: {divisor} is 0")]
    ZeroDivision { divisor: &'static str },
}

/// Result type for training operations.
pub type TrainingResult<T> = Result<T, TrainingError>;

/// Summary of a single workout, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Human-facing name of the workout variant (e.g. "Running")
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Energy spent in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the fixed-format report line.
    ///
    /// Every numeric field is printed with three decimals, rounded from the
    /// exact binary value with ties to even.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
