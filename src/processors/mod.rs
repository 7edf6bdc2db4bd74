pub mod coverage;
pub mod pipeline;

pub use coverage::{CoverageChecker, CoverageReport, FlagCounts};
pub use pipeline::{run, LoadLimitProcessor};
