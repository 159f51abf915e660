//! Workout dispatch from package codes.
//!
//! Maps a workout code to its calculator and binds the positional sensor
//! fields to the calculator's constructor. The set of workouts is closed, so
//! dispatch produces a tagged [`Workout`] rather than a boxed trait object.

use crate::training::base::{Training, TrainingData};
use crate::training::running::Running;
use crate::training::swimming::Swimming;
use crate::training::types::{TrainingError, TrainingResult};
use crate::training::walking::SportsWalking;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Workout types known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// `SWM`
    Swimming,
    /// `RUN`
    Running,
    /// `WLK`
    SportsWalking,
}

impl WorkoutType {
    /// All dispatchable workout types.
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Package code used to select this workout.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Positional field names expected by the constructor.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of positional fields expected by the constructor.
    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    /// Construct the workout from positional fields.
    pub fn build(&self, data: &[f64]) -> TrainingResult<Workout> {
        if data.len() != self.arity() {
            return Err(TrainingError::ArityMismatch {
                code: self.code().to_string(),
                expected: self.arity(),
                actual: data.len(),
            });
        }

        let action = integer_field("action", data[0])?;
        let (duration, weight) = (data[1], data[2]);

        let workout = match self {
            WorkoutType::Running => Workout::Running(Running::new(action, duration, weight)),
            WorkoutType::SportsWalking => {
                let height = integer_field("height", data[3])?;
                Workout::SportsWalking(SportsWalking::new(action, duration, weight, height))
            }
            WorkoutType::Swimming => {
                let length_pool = integer_field("length_pool", data[3])?;
                let count_pool = integer_field("count_pool", data[4])?;
                Workout::Swimming(Swimming::new(
                    action,
                    duration,
                    weight,
                    length_pool,
                    count_pool,
                ))
            }
        };

        Ok(workout)
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == code)
            .ok_or_else(|| TrainingError::UnknownWorkoutType(code.to_string()))
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A constructed workout of one of the known types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    /// Workout type this value was built as.
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Swimming(_) => WorkoutType::Swimming,
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
        }
    }

    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Swimming(swim) => swim,
            Workout::Running(run) => run,
            Workout::SportsWalking(walk) => walk,
        }
    }
}

impl Training for Workout {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn data(&self) -> &TrainingData {
        self.inner().data()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> TrainingResult<f64> {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> TrainingResult<f64> {
        self.inner().spent_calories()
    }
}

/// Build the workout selected by `workout_type` from its sensor fields.
///
/// Fails with [`TrainingError::UnknownWorkoutType`] for codes outside the
/// dispatch table and with [`TrainingError::ArityMismatch`] when the field
/// count does not match the workout.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrainingResult<Workout> {
    let workout_type: WorkoutType = workout_type.parse()?;
    let workout = workout_type.build(data)?;
    tracing::debug!(code = %workout_type, fields = data.len(), "Dispatched package");
    Ok(workout)
}

/// Bind a number to an integer slot. Only integral values are accepted.
fn integer_field(field: &'static str, value: f64) -> TrainingResult<i64> {
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if value.fract() != 0.0 || !(-UPPER..UPPER).contains(&value) {
        return Err(TrainingError::InvalidField { field, value });
    }
    Ok(value as i64)
}
