use crate::error::{Error, Result};
use crate::trial::TrialEvaluation;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TrialStatus {
    Succeeded { evaluation: TrialEvaluation },
    Failed { reason: String },
}

/// Outcome of one trial, tagged with its 1-based index.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialOutcome {
    pub index: usize,
    pub name: String,
    #[serde(flatten)]
    pub status: TrialStatus,
}

impl TrialOutcome {
    pub fn error_rate(&self) -> Option<f64> {
        match &self.status {
            TrialStatus::Succeeded { evaluation } => Some(evaluation.error_rate),
            TrialStatus::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, TrialStatus::Succeeded { .. })
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            TrialStatus::Succeeded { evaluation } => {
                write!(f, "{}: error rate {:.1}%", self.name, evaluation.error_rate)
            }
            TrialStatus::Failed { reason } => write!(f, "{}: failed: {reason}", self.name),
        }
    }
}

/// Per-trial outcomes in trial order plus the mean over successful trials.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentReport {
    pub trials: Vec<TrialOutcome>,
    pub attempted: usize,
    pub succeeded: usize,
    /// `None` when no trial succeeded.
    pub mean_error_rate: Option<f64>,
}

impl ExperimentReport {
    /// Build the report; outcomes are re-sorted by trial index.
    pub fn from_outcomes(mut trials: Vec<TrialOutcome>) -> Self {
        trials.sort_by_key(|t| t.index);
        let rates: Vec<f64> = trials.iter().filter_map(TrialOutcome::error_rate).collect();
        let mean_error_rate =
            (!rates.is_empty()).then(|| rates.iter().sum::<f64>() / rates.len() as f64);
        Self {
            attempted: trials.len(),
            succeeded: rates.len(),
            trials,
            mean_error_rate,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &TrialOutcome> {
        self.trials.iter().filter(|t| !t.is_success())
    }

    /// Mean error rate of the successful trials.
    pub fn mean_error_rate(&self) -> Result<f64> {
        self.mean_error_rate.ok_or(Error::NoSuccessfulTrials {
            attempted: self.attempted,
        })
    }
}
