use super::layout::TrialLayout;
use super::loader::ShapeLoader;
use super::matrix::{DissimilarityMatrix, Polarity};
use super::record::TrialRecord;
use crate::diagnostics::timing::{elapsed_ms, TimingBreakdown};
use crate::error::Result;
use crate::shape::{Dissimilarity, PointSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Which recorded answer a matrix row is judged against.
///
/// Rows follow the sorted query order while label files are read in file
/// order. The two rules agree whenever the label file is sorted by query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    /// Row `i` is compared with the answer on line `i` of the label file.
    #[default]
    FileOrder,
    /// Row `i` is compared with the answer recorded for the query of row `i`.
    ByQuery,
}

/// Outcome for a single query of a trial.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPrediction {
    pub query: String,
    /// Candidate at the selected column, `None` if no column was selectable.
    pub predicted: Option<String>,
    pub expected: String,
    pub correct: bool,
    /// Matrix entry of the selected column.
    pub value: Option<f64>,
}

/// Result of evaluating one trial.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialEvaluation {
    /// Percentage of mispredicted queries, in `[0, 100]`.
    pub error_rate: f64,
    pub query_count: usize,
    pub candidate_count: usize,
    pub predictions: Vec<QueryPrediction>,
    pub timing: TimingBreakdown,
}

impl TrialEvaluation {
    pub fn mispredicted(&self) -> usize {
        self.predictions.iter().filter(|p| !p.correct).count()
    }
}

/// Nearest-neighbor classification of one trial.
///
/// The loader and the metric are injected so trials can be evaluated on
/// synthetic shapes or with another comparison function.
pub struct TrialEvaluator<'a> {
    loader: &'a dyn ShapeLoader,
    metric: &'a dyn Dissimilarity,
    polarity: Polarity,
    answer_key: AnswerKey,
}

impl<'a> TrialEvaluator<'a> {
    pub fn new(
        loader: &'a dyn ShapeLoader,
        metric: &'a dyn Dissimilarity,
        polarity: Polarity,
    ) -> Self {
        Self {
            loader,
            metric,
            polarity,
            answer_key: AnswerKey::default(),
        }
    }

    pub fn with_answer_key(mut self, answer_key: AnswerKey) -> Self {
        self.answer_key = answer_key;
        self
    }

    /// Resolve trial `index` below `layout`, parse its labels and evaluate it.
    ///
    /// A missing directory or label file fails before any shape is loaded.
    pub fn classify_trial(&self, layout: &TrialLayout, index: usize) -> Result<TrialEvaluation> {
        let paths = layout.resolve(index)?;
        let record = TrialRecord::load(&paths.label_file)?;
        debug!(
            "{}: {} label entries from {}",
            paths.name,
            record.len(),
            paths.label_file.display()
        );
        self.evaluate(&record)
    }

    /// Evaluate an already parsed trial. Any failure is reported as
    /// `TrialExecution` wrapping the cause.
    pub fn evaluate(&self, record: &TrialRecord) -> Result<TrialEvaluation> {
        self.evaluate_inner(record)
            .map_err(|e| e.into_trial_execution())
    }

    fn evaluate_inner(&self, record: &TrialRecord) -> Result<TrialEvaluation> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let queries = record.sorted_queries();
        let candidates = record.sorted_candidates();

        let load_start = Instant::now();
        let query_shapes = self.load_all(&queries)?;
        let candidate_shapes = self.load_all(&candidates)?;
        timing.record_since("load", load_start);

        let matrix_start = Instant::now();
        let matrix = DissimilarityMatrix::compute(&query_shapes, &candidate_shapes, self.metric);
        timing.record_since("matrix", matrix_start);

        let assign_start = Instant::now();
        let selected = matrix.assign(self.polarity);
        let predictions: Vec<QueryPrediction> = selected
            .iter()
            .enumerate()
            .map(|(row, &col)| self.judge(record, &queries, &candidates, &matrix, row, col))
            .collect();
        timing.record_since("assign", assign_start);

        let wrong = predictions.iter().filter(|p| !p.correct).count();
        let error_rate = 100.0 * wrong as f64 / queries.len() as f64;
        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "trial evaluated: {}x{} matrix, {} wrong, {:.3} ms",
            matrix.rows(),
            matrix.cols(),
            wrong,
            timing.total_ms
        );

        Ok(TrialEvaluation {
            error_rate,
            query_count: queries.len(),
            candidate_count: candidates.len(),
            predictions,
            timing,
        })
    }

    fn load_all(&self, identifiers: &[String]) -> Result<Vec<PointSet>> {
        identifiers.iter().map(|id| self.loader.load(id)).collect()
    }

    fn judge(
        &self,
        record: &TrialRecord,
        queries: &[String],
        candidates: &[String],
        matrix: &DissimilarityMatrix,
        row: usize,
        col: Option<usize>,
    ) -> QueryPrediction {
        let query = &queries[row];
        let expected = match self.answer_key {
            AnswerKey::FileOrder => record.answer_at(row),
            AnswerKey::ByQuery => record.answer_for(query),
        }
        .unwrap_or_default()
        .to_string();
        let predicted = col.map(|c| candidates[c].clone());
        let correct = predicted.as_deref() == Some(expected.as_str());
        QueryPrediction {
            query: query.clone(),
            predicted,
            expected,
            correct,
            value: col.map(|c| matrix.get(row, c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::shape::ModifiedHausdorff;
    use nalgebra::Point2;
    use std::collections::HashMap;

    struct FakeLoader(HashMap<String, PointSet>);

    impl FakeLoader {
        fn new(shapes: Vec<(&str, PointSet)>) -> Self {
            Self(
                shapes
                    .into_iter()
                    .map(|(id, set)| (id.to_string(), set))
                    .collect(),
            )
        }
    }

    impl ShapeLoader for FakeLoader {
        fn load(&self, identifier: &str) -> Result<PointSet> {
            self.0.get(identifier).cloned().ok_or(Error::EmptyShape)
        }
    }

    fn pts(points: &[(f64, f64)]) -> PointSet {
        PointSet::new(points.iter().map(|&(r, c)| Point2::new(r, c)).collect()).unwrap()
    }

    /// Metric returning a fixed table keyed by (query, candidate) x-coordinate.
    struct TableMetric(HashMap<(i64, i64), f64>);

    impl Dissimilarity for TableMetric {
        fn dissimilarity(&self, a: &PointSet, b: &PointSet) -> f64 {
            let key = (a.points()[0].x as i64, b.points()[0].x as i64);
            self.0[&key]
        }
    }

    #[test]
    fn identical_single_pair_has_zero_error() {
        let glyph = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let loader = FakeLoader::new(vec![("q", glyph.clone()), ("c", glyph)]);
        let record = TrialRecord::from_pairs([("q", "c")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap();
        assert_eq!(eval.error_rate, 0.0);
        assert_eq!(eval.predictions[0].predicted.as_deref(), Some("c"));
        assert_eq!(eval.predictions[0].value, Some(0.0));
    }

    #[test]
    fn wrong_recorded_answer_counts_as_miss() {
        // q1 coincides with B, q2 coincides with A; labels say q1 -> A.
        let loader = FakeLoader::new(vec![
            ("q1", pts(&[(5.0, 5.0)])),
            ("q2", pts(&[(0.0, 0.0)])),
            ("A", pts(&[(0.0, 0.0)])),
            ("B", pts(&[(5.0, 5.0)])),
        ]);
        let record = TrialRecord::from_pairs([("q1", "A"), ("q2", "B")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap();
        assert_eq!(eval.predictions[0].query, "q1");
        assert_eq!(eval.predictions[0].predicted.as_deref(), Some("B"));
        assert!(!eval.predictions[0].correct);
        assert_eq!(eval.error_rate, 100.0);
    }

    #[test]
    fn tie_goes_to_first_sorted_candidate() {
        let loader = FakeLoader::new(vec![
            ("q", pts(&[(0.0, 0.0)])),
            ("p", pts(&[(9.0, 9.0)])),
            ("b", pts(&[(0.0, 2.0)])),
            ("a", pts(&[(0.0, -2.0)])),
        ]);
        let record = TrialRecord::from_pairs([("q", "a"), ("p", "b")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .with_answer_key(AnswerKey::ByQuery)
            .evaluate(&record)
            .unwrap();
        // rows sorted: p, q; q is equidistant from a and b
        let q = &eval.predictions[1];
        assert_eq!(q.query, "q");
        assert_eq!(q.predicted.as_deref(), Some("a"));
        assert!(q.correct);
        assert_eq!(eval.error_rate, 0.0);
    }

    #[test]
    fn score_polarity_selects_maximum() {
        let loader = FakeLoader::new(vec![
            ("q", pts(&[(0.0, 0.0)])),
            ("q0", pts(&[(0.0, 1.0)])),
            ("a", pts(&[(1.0, 0.0)])),
            ("b", pts(&[(2.0, 0.0)])),
        ]);
        let metric = TableMetric(HashMap::from([((0, 1), 0.3), ((0, 2), 0.8)]));
        let record = TrialRecord::from_pairs([("q", "b"), ("q0", "a")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &metric, Polarity::Score)
            .with_answer_key(AnswerKey::ByQuery)
            .evaluate(&record)
            .unwrap();
        // both queries sit at row 0, so both rows pick b
        assert!(eval
            .predictions
            .iter()
            .all(|p| p.predicted.as_deref() == Some("b")));
        assert_eq!(eval.mispredicted(), 1);
        assert_eq!(eval.error_rate, 50.0);
    }

    #[test]
    fn file_order_compares_rows_with_label_lines() {
        // Label file lists q2 before q1; rows are sorted q1, q2.
        let loader = FakeLoader::new(vec![
            ("q1", pts(&[(0.0, 0.0)])),
            ("q2", pts(&[(8.0, 8.0)])),
            ("A", pts(&[(0.0, 0.0)])),
            ("B", pts(&[(8.0, 8.0)])),
        ]);
        let record = TrialRecord::from_pairs([("q2", "B"), ("q1", "A")]).unwrap();

        let literal = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap();
        assert_eq!(literal.error_rate, 100.0);

        let by_query = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .with_answer_key(AnswerKey::ByQuery)
            .evaluate(&record)
            .unwrap();
        assert_eq!(by_query.error_rate, 0.0);
    }

    #[test]
    fn repeated_label_line_is_evaluated_twice() {
        let loader = FakeLoader::new(vec![("q", pts(&[(0.0, 0.0)])), ("c", pts(&[(3.0, 4.0)]))]);
        let record = TrialRecord::from_pairs([("q", "c"), ("q", "c")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap();
        assert_eq!(eval.query_count, 2);
        assert_eq!(eval.candidate_count, 1);
        assert_eq!(eval.error_rate, 0.0);
    }

    #[test]
    fn load_failure_is_wrapped() {
        let loader = FakeLoader::new(vec![("q", pts(&[(0.0, 0.0)]))]);
        let record = TrialRecord::from_pairs([("q", "missing")]).unwrap();
        let err = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap_err();
        match err {
            Error::TrialExecution(inner) => assert!(matches!(*inner, Error::EmptyShape)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn timings_cover_each_stage() {
        let loader = FakeLoader::new(vec![("q", pts(&[(0.0, 0.0)])), ("c", pts(&[(1.0, 0.0)]))]);
        let record = TrialRecord::from_pairs([("q", "c")]).unwrap();
        let eval = TrialEvaluator::new(&loader, &ModifiedHausdorff, Polarity::Cost)
            .evaluate(&record)
            .unwrap();
        for stage in ["load", "matrix", "assign"] {
            assert!(eval.timing.stage(stage).is_some(), "missing {stage}");
        }
    }
}
