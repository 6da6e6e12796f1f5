//! Error taxonomy for the classifier.
//!
//! Trial-local failures (`MissingTrialDirectory`, `MissingLabelFile`,
//! `LabelParse`, `TrialExecution`) are caught by the experiment runner and
//! reported per trial. `MissingRunRoot` and `NoSuccessfulTrials` end the run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Image without a single foreground pixel; the centroid is undefined.
    #[error("image contains no foreground pixels")]
    EmptyShape,

    #[error("failed to decode image {}: {reason}", path.display())]
    ImageDecode { path: PathBuf, reason: String },

    #[error("run directory {} does not exist", .0.display())]
    MissingRunRoot(PathBuf),

    #[error("trial directory {} does not exist", .0.display())]
    MissingTrialDirectory(PathBuf),

    #[error("label file {} not found", .0.display())]
    MissingLabelFile(PathBuf),

    #[error("label file {}:{line}: {reason}", path.display())]
    LabelParse {
        path: PathBuf,
        /// 1-based line number, 0 when the failure concerns the whole file.
        line: usize,
        reason: String,
    },

    /// Any failure raised while loading shapes, filling the matrix or
    /// assigning labels inside one trial.
    #[error("error during classification run: {0}")]
    TrialExecution(#[source] Box<Error>),

    #[error("no trial succeeded out of {attempted} attempted")]
    NoSuccessfulTrials { attempted: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Wrap `self` as a trial execution failure unless it already is one.
    pub fn into_trial_execution(self) -> Self {
        match self {
            Error::TrialExecution(_) => self,
            other => Error::TrialExecution(Box::new(other)),
        }
    }
}
