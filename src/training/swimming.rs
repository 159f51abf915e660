//! Swimming calculator.

use crate::training::base::{checked_div, Training, TrainingData};
use crate::training::types::{TrainingResult, M_IN_KM, SWIM_STEP_M};
use serde::{Deserialize, Serialize};

/// Speed shift in the swimming calorie formula.
const SPEED_SHIFT: f64 = 1.1;
/// Weight multiplier in the swimming calorie formula.
const WEIGHT_MULTIPLIER: f64 = 2.0;

/// A swimming workout. Speed comes from pool length and laps, not strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length in meters
    length_pool: i64,
    /// Number of pool lengths swum
    count_pool: i64,
}

impl Swimming {
    /// Create a swimming workout.
    pub fn new(action: i64, duration: f64, weight: f64, length_pool: i64, count_pool: i64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    /// Pool length in meters.
    pub fn length_pool(&self) -> i64 {
        self.length_pool
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> i64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn step_length(&self) -> f64 {
        SWIM_STEP_M
    }

    /// `length_pool * count_pool / 1000 / duration`
    fn mean_speed(&self) -> TrainingResult<f64> {
        let pool_meters = (self.length_pool as i128 * self.count_pool as i128) as f64;
        checked_div(pool_meters / M_IN_KM, self.data.duration, "duration")
    }

    /// `(speed + 1.1) * 2 * weight`
    fn spent_calories(&self) -> TrainingResult<f64> {
        let speed = self.mean_speed()?;
        Ok((speed + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.data.weight)
    }
}
