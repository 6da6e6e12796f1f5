//! One classification trial: labels in, error rate out.
//!
//! A trial is a folder holding a label file that pairs every query image with
//! the candidate image of the same class. Queries and distinct candidates are
//! sorted by identifier to fix the rows and columns of the dissimilarity
//! matrix; each query is assigned the best column of its row and judged
//! against the recorded answer.

pub mod evaluator;
pub mod layout;
pub mod loader;
pub mod matrix;
pub mod record;

pub use evaluator::{AnswerKey, QueryPrediction, TrialEvaluation, TrialEvaluator};
pub use layout::{TrialLayout, TrialPaths};
pub use loader::{FileShapeLoader, ShapeLoader};
pub use matrix::{DissimilarityMatrix, Polarity};
pub use record::TrialRecord;
