use super::PointSet;
use nalgebra::distance;

/// Pairwise shape comparison used to fill a trial's dissimilarity matrix.
pub trait Dissimilarity: Send + Sync {
    fn dissimilarity(&self, a: &PointSet, b: &PointSet) -> f64;
}

/// Modified Hausdorff distance (Dubuisson & Jain).
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifiedHausdorff;

impl Dissimilarity for ModifiedHausdorff {
    fn dissimilarity(&self, a: &PointSet, b: &PointSet) -> f64 {
        modified_hausdorff_distance(a, b)
    }
}

/// Maximum of the two directed mean nearest-neighbor distances.
///
/// Every pair of points is visited once; the minima for both directions are
/// accumulated from the same n×m sweep.
pub fn modified_hausdorff_distance(a: &PointSet, b: &PointSet) -> f64 {
    let pa = a.points();
    let pb = b.points();
    let mut min_b = vec![f64::INFINITY; pb.len()];
    let mut sum_a = 0.0;
    for p in pa {
        let mut min_a = f64::INFINITY;
        for (q, mb) in pb.iter().zip(min_b.iter_mut()) {
            let d = distance(p, q);
            min_a = min_a.min(d);
            *mb = mb.min(d);
        }
        sum_a += min_a;
    }
    let d_ab = sum_a / pa.len() as f64;
    let d_ba = min_b.iter().sum::<f64>() / pb.len() as f64;
    d_ab.max(d_ba)
}
