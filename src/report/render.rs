//! Rendering of dispatch outcomes into report lines.
//!
//! Only an unknown workout code is turned into a message here. Every other
//! failure (bad field count, division by zero, a missing calorie formula) is
//! returned to the caller untouched.

use crate::training::{InfoMessage, Training, TrainingError, TrainingResult, Workout};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Line format for reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Errors that can occur while producing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Workout could not be built or calculated.
    #[error(transparent)]
    Training(#[from] TrainingError),

    /// Report could not be serialized.
    #[error("Serialize error: {0}")]
    SerializeError(String),

    /// Report could not be written.
    #[error("Write failed: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// JSON body emitted for an unrecognised workout code.
#[derive(Debug, Serialize)]
struct UnknownTypeReport<'a> {
    error: String,
    code: &'a str,
}

/// Render a single dispatch outcome.
///
/// A built workout is summarised with [`Training::show_training_info`]. An
/// unknown code becomes the unknown-type message. Any other error propagates.
pub fn render_outcome(outcome: TrainingResult<Workout>, format: OutputFormat) -> ReportResult<String> {
    match outcome {
        Ok(workout) => {
            let info = workout.show_training_info()?;
            render_info(&info, format)
        }
        Err(err @ TrainingError::UnknownWorkoutType(_)) => render_unknown(&err, format),
        Err(err) => Err(err.into()),
    }
}

/// Render a computed summary.
pub fn render_info(info: &InfoMessage, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => {
            serde_json::to_string(info).map_err(|e| ReportError::SerializeError(e.to_string()))
        }
    }
}

fn render_unknown(err: &TrainingError, format: OutputFormat) -> ReportResult<String> {
    match (format, err) {
        (OutputFormat::Text, _) => Ok(err.to_string()),
        (OutputFormat::Json, TrainingError::UnknownWorkoutType(code)) => {
            let body = UnknownTypeReport {
                error: err.to_string(),
                code: code.as_str(),
            };
            serde_json::to_string(&body).map_err(|e| ReportError::SerializeError(e.to_string()))
        }
        (OutputFormat::Json, _) => Err(ReportError::Training(err.clone())),
    }
}
