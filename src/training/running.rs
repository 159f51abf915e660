//! Running calculator.

use crate::training::base::{Training, TrainingData};
use crate::training::types::{TrainingResult, MIN_IN_H, M_IN_KM};
use serde::{Deserialize, Serialize};

/// Speed multiplier in the running calorie formula.
const SPEED_MULTIPLIER: f64 = 18.0;
/// Speed shift in the running calorie formula.
const SPEED_SHIFT: f64 = 20.0;

/// A running workout: counted strides, duration and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    /// Create a running workout.
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    /// `(18 * speed - 20) * weight / 1000 * minutes`
    fn spent_calories(&self) -> TrainingResult<f64> {
        let speed = self.mean_speed()?;
        Ok((SPEED_MULTIPLIER * speed - SPEED_SHIFT) * self.data.weight / M_IN_KM
            * (self.data.duration * MIN_IN_H))
    }
}
