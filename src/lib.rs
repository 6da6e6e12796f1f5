#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod experiment;
pub mod image;
pub mod shape;
pub mod trial;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{ExperimentConfig, RuntimeConfig};
pub use crate::error::{Error, Result};
pub use crate::experiment::{ExperimentReport, ExperimentRunner, TrialOutcome};
pub use crate::shape::{modified_hausdorff_distance, Dissimilarity, ModifiedHausdorff, PointSet};
pub use crate::trial::{Polarity, TrialEvaluation, TrialEvaluator, TrialRecord};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use oneshot_classifier::prelude::*;
///
/// # fn main() -> oneshot_classifier::Result<()> {
/// let runner = ExperimentRunner::new(ExperimentConfig {
///     runs_dir: "all_runs".into(),
///     ..Default::default()
/// });
/// let report = runner.run()?;
/// println!("mean error {:.1}%", report.mean_error_rate()?);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::shape::{extract_point_set, Ink};
    pub use crate::trial::{FileShapeLoader, ShapeLoader};
    pub use crate::{
        Dissimilarity, ExperimentConfig, ExperimentReport, ExperimentRunner, ModifiedHausdorff,
        PointSet, Polarity, TrialEvaluator, TrialRecord,
    };
}
