use crate::shape::Ink;
use crate::trial::{AnswerKey, Polarity, TrialLayout};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed parameters of an experiment, set once at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Root holding `run01`, `run02`, ...; label identifiers resolve against it.
    pub runs_dir: PathBuf,
    /// Number of trials.
    pub runs: usize,
    pub label_filename: String,
    pub polarity: Polarity,
    pub ink: Ink,
    pub answer_key: AnswerKey,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs_dir: PathBuf::from("all_runs"),
            runs: 20,
            label_filename: "class_labels.txt".to_string(),
            polarity: Polarity::Cost,
            ink: Ink::Dark,
            answer_key: AnswerKey::FileOrder,
        }
    }
}

impl ExperimentConfig {
    pub fn layout(&self) -> TrialLayout {
        TrialLayout::new(self.runs_dir.clone(), self.label_filename.clone())
    }
}
