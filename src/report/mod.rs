//! Report rendering and the package reporting loop.

pub mod render;
pub mod runner;

pub use render::{render_outcome, OutputFormat, ReportError, ReportResult};
pub use runner::{ReportRunner, ReportSummary};
