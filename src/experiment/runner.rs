use super::report::{ExperimentReport, TrialOutcome, TrialStatus};
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::shape::{Dissimilarity, ModifiedHausdorff};
use crate::trial::{FileShapeLoader, ShapeLoader, TrialEvaluator, TrialLayout};
use log::{debug, info, warn};

/// Runs trials `1..=runs` and collects their outcomes.
///
/// A failing trial is logged and recorded; the batch always continues.
pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Evaluate every trial from disk with the modified Hausdorff distance.
    ///
    /// Only a missing run root is fatal here; see
    /// [`ExperimentReport::mean_error_rate`] for the empty-batch case.
    pub fn run(&self) -> Result<ExperimentReport> {
        let loader = FileShapeLoader::new(self.config.runs_dir.clone(), self.config.ink);
        self.run_with(&loader, &ModifiedHausdorff)
    }

    /// Run every trial and return the mean error rate of the successful ones.
    ///
    /// Fails with `NoSuccessfulTrials` when every trial failed.
    pub fn run_to_mean(&self) -> Result<f64> {
        self.run()?.mean_error_rate()
    }

    /// Same as [`run`](Self::run) with an injected loader and metric.
    pub fn run_with(
        &self,
        loader: &dyn ShapeLoader,
        metric: &dyn Dissimilarity,
    ) -> Result<ExperimentReport> {
        let layout = self.config.layout();
        layout.ensure_root()?;
        info!(
            "running {} one-shot trials from {}",
            self.config.runs,
            layout.runs_dir().display()
        );

        let evaluator = TrialEvaluator::new(loader, metric, self.config.polarity)
            .with_answer_key(self.config.answer_key);
        let run_one = |index: usize| run_trial(&evaluator, &layout, index);

        #[cfg(feature = "parallel")]
        let outcomes: Vec<TrialOutcome> = {
            use rayon::prelude::*;
            (1..=self.config.runs).into_par_iter().map(run_one).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<TrialOutcome> = (1..=self.config.runs).map(run_one).collect();

        let report = ExperimentReport::from_outcomes(outcomes);
        match report.mean_error_rate {
            Some(mean) => debug!(
                "average error rate across {} of {} runs: {:.1}%",
                report.succeeded, report.attempted, mean
            ),
            None => warn!("none of the {} runs succeeded", report.attempted),
        }
        Ok(report)
    }
}

fn run_trial(evaluator: &TrialEvaluator<'_>, layout: &TrialLayout, index: usize) -> TrialOutcome {
    let name = TrialLayout::trial_name(index);
    let status = match evaluator.classify_trial(layout, index) {
        Ok(evaluation) => TrialStatus::Succeeded { evaluation },
        Err(err) => TrialStatus::Failed {
            reason: err.to_string(),
        },
    };
    let outcome = TrialOutcome {
        index,
        name,
        status,
    };
    if outcome.is_success() {
        info!("{outcome}");
    } else {
        warn!("{outcome}");
    }
    outcome
}
