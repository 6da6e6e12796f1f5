//! Batch evaluation over numbered trials.

pub mod report;
pub mod runner;

pub use report::{ExperimentReport, TrialOutcome, TrialStatus};
pub use runner::ExperimentRunner;
