use crate::shape::{Dissimilarity, PointSet};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Whether low or high matrix entries mark the better match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Lower is better: argmin per row.
    #[default]
    Cost,
    /// Higher is better: argmax per row.
    Score,
}

impl Polarity {
    #[inline]
    fn prefers(self, candidate: f64, best: f64) -> bool {
        match self {
            Polarity::Cost => candidate < best,
            Polarity::Score => candidate > best,
        }
    }
}

/// Queries × candidates table of pairwise dissimilarities.
#[derive(Clone, Debug)]
pub struct DissimilarityMatrix {
    values: DMatrix<f64>,
}

impl DissimilarityMatrix {
    /// Wrap precomputed values given in row-major order.
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> Self {
        Self {
            values: DMatrix::from_row_slice(rows, cols, values),
        }
    }

    /// Entry `(i, j)` = `metric(queries[i], candidates[j])`.
    pub fn compute<D>(queries: &[PointSet], candidates: &[PointSet], metric: &D) -> Self
    where
        D: Dissimilarity + ?Sized,
    {
        let cols = candidates.len();
        let cell = |k: usize| metric.dissimilarity(&queries[k / cols], &candidates[k % cols]);
        let total = queries.len() * cols;

        #[cfg(feature = "parallel")]
        let values: Vec<f64> = {
            use rayon::prelude::*;
            (0..total).into_par_iter().map(cell).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let values: Vec<f64> = (0..total).map(cell).collect();

        Self::from_row_major(queries.len(), cols, &values)
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    /// Best column of `row` under `polarity`.
    ///
    /// Ties go to the lowest column index. NaN entries never win unless the
    /// whole row is NaN, in which case column 0 is returned; unlike numpy's
    /// `argmin`, a NaN earlier in the row does not take precedence. `None`
    /// only for a matrix without columns.
    pub fn best_in_row(&self, row: usize, polarity: Polarity) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (col, &v) in self.values.row(row).iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if !polarity.prefers(v, b) => {}
                _ => best = Some((col, v)),
            }
        }
        best.map(|(col, _)| col)
            .or_else(|| (self.cols() > 0).then_some(0))
    }

    /// `best_in_row` for every row.
    pub fn assign(&self, polarity: Polarity) -> Vec<Option<usize>> {
        (0..self.rows())
            .map(|row| self.best_in_row(row, polarity))
            .collect()
    }
}
