//! Sports walking calculator.

use crate::training::base::{floor_div, Training, TrainingData};
use crate::training::types::{TrainingResult, MIN_IN_H};
use serde::{Deserialize, Serialize};

/// Weight coefficient of the walking calorie formula.
const WEIGHT_MULTIPLIER: f64 = 0.035;
/// Speed/height coefficient of the walking calorie formula.
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A sports walking workout. Adds the athlete's height in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    data: TrainingData,
    height: i64,
}

impl SportsWalking {
    /// Create a sports walking workout.
    pub fn new(action: i64, duration: f64, weight: f64, height: i64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            height,
        }
    }

    /// Athlete height in centimeters.
    pub fn height(&self) -> i64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    /// `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * minutes`
    fn spent_calories(&self) -> TrainingResult<f64> {
        let speed = self.mean_speed()?;
        let speed_per_height = floor_div(speed.powi(2), self.height as f64, "height")?;
        Ok((WEIGHT_MULTIPLIER * self.data.weight
            + speed_per_height * SPEED_HEIGHT_MULTIPLIER * self.data.weight)
            * (self.data.duration * MIN_IN_H))
    }
}
