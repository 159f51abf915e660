//! Shared training interface and base record.
//!
//! Every workout variant exposes the same four operations: distance, mean
//! speed, spent calories and the summary report. Distance and speed have
//! shared formulas; calories are variant-specific and have no base definition.

use crate::training::types::{
    InfoMessage, TrainingError, TrainingResult, LAND_STEP_M, M_IN_KM,
};
use serde::{Deserialize, Serialize};

/// Raw inputs common to every workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    /// Steps or strokes counted by the sensor
    pub action: i64,
    /// Duration in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl TrainingData {
    /// Create a new base record.
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Common interface of all workout calculators.
pub trait Training {
    /// Human-facing name of the concrete workout.
    fn name(&self) -> &'static str;

    /// Raw inputs of the workout.
    fn data(&self) -> &TrainingData;

    /// Distance covered per action, in meters.
    fn step_length(&self) -> f64 {
        LAND_STEP_M
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.data().action as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole duration in km/h.
    fn mean_speed(&self) -> TrainingResult<f64> {
        checked_div(self.distance(), self.data().duration, "duration")
    }

    /// Energy spent in kcal. Variants must override this.
    fn spent_calories(&self) -> TrainingResult<f64> {
        Err(TrainingError::UnsupportedOperation {
            operation: "spent_calories",
            training: self.name(),
        })
    }

    /// Build the summary report for this workout.
    fn show_training_info(&self) -> TrainingResult<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.name().to_string(),
            duration: self.data().duration,
            distance: self.distance(),
            speed: self.mean_speed()?,
            calories: self.spent_calories()?,
        })
    }
}

/// The base record on its own is not a concrete workout: it shares distance
/// and speed but cannot compute calories.
impl Training for TrainingData {
    fn name(&self) -> &'static str {
        "Training"
    }

    fn data(&self) -> &TrainingData {
        self
    }
}

/// Divide, failing when the divisor is zero.
pub fn checked_div(numerator: f64, denominator: f64, divisor: &'static str) -> TrainingResult<f64> {
    if denominator == 0.0 {
        return Err(TrainingError::ZeroDivision { divisor });
    }
    Ok(numerator / denominator)
}

/// Floor division rounding toward negative infinity.
///
/// The quotient is derived from the floating remainder rather than from
/// `(a / b).floor()`, so results such as `1.0 // 0.1 == 9.0` hold and signed
/// zeros follow the sign of the exact quotient.
pub fn floor_div(numerator: f64, denominator: f64, divisor: &'static str) -> TrainingResult<f64> {
    if denominator == 0.0 {
        return Err(TrainingError::ZeroDivision { divisor });
    }

    let rem = numerator % denominator;
    let mut div = (numerator - rem) / denominator;
    if rem != 0.0 && (denominator < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Ok(0.0_f64.copysign(numerator / denominator));
    }

    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}
