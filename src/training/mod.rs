//! Workout calculators.
//!
//! A shared [`Training`] interface with one calculator per workout type and a
//! dispatcher that builds the right calculator from a package code.

pub mod base;
pub mod dispatch;
pub mod running;
pub mod swimming;
pub mod types;
pub mod walking;

pub use base::{Training, TrainingData};
pub use dispatch::{read_package, Workout, WorkoutType};
pub use running::Running;
pub use swimming::Swimming;
pub use types::{InfoMessage, TrainingError, TrainingResult};
pub use walking::SportsWalking;
