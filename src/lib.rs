//! Fitness Tracker - Workout Summary Calculator
//!
//! Computes distance, mean speed and spent calories for running, sports
//! walking and swimming from raw sensor packages, and renders one report
//! line per workout.

pub mod packages;
pub mod report;
pub mod storage;
pub mod training;

// Re-export commonly used types
pub use packages::Package;
pub use report::{render_outcome, OutputFormat, ReportRunner};
pub use storage::config::AppConfig;
pub use training::{read_package, InfoMessage, Training, TrainingError, Workout, WorkoutType};
