//! Sequential reporting over a list of packages.

use crate::packages::Package;
use crate::report::render::{render_outcome, OutputFormat, ReportResult};
use crate::training::{read_package, TrainingError};
use std::io::Write;

/// Counts of what a reporting run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Packages rendered as workout reports
    pub reported: usize,
    /// Packages skipped for an unknown workout code
    pub unknown: usize,
}

/// Writes one report line per package to an output sink.
pub struct ReportRunner<W: Write> {
    out: W,
    format: OutputFormat,
    summary: ReportSummary,
}

impl<W: Write> ReportRunner<W> {
    /// Create a runner writing to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: ReportSummary::default(),
        }
    }

    /// Dispatch, calculate and write a single package.
    ///
    /// Unknown codes produce the unknown-type line and count as skipped.
    /// Any other failure is returned and nothing is written for the package.
    pub fn report(&mut self, package: &Package) -> ReportResult<()> {
        let outcome = read_package(&package.code, &package.data);
        let unknown = matches!(outcome, Err(TrainingError::UnknownWorkoutType(_)));
        let line = render_outcome(outcome, self.format)?;

        if unknown {
            tracing::warn!(code = %package.code, "Unknown workout type, skipping");
            self.summary.unknown += 1;
        } else {
            tracing::debug!(code = %package.code, "Reported workout");
            self.summary.reported += 1;
        }

        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Report every package in order, stopping at the first fatal error.
    pub fn run(&mut self, packages: &[Package]) -> ReportResult<ReportSummary> {
        for package in packages {
            self.report(package)?;
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Counts so far.
    pub fn summary(&self) -> ReportSummary {
        self.summary
    }

    /// Consume the runner and return the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
