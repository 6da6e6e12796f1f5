//! Shape representation and the shape dissimilarity metric.
//!
//! An image is reduced to the centered coordinates of its foreground pixels
//! (`PointSet`). Two point sets are compared with the modified Hausdorff
//! distance, exposed both as a free function and through the `Dissimilarity`
//! trait so trials can be evaluated with a substitute metric.

pub mod extract;
pub mod hausdorff;
pub mod points;

pub use extract::{extract_point_set, Ink};
pub use hausdorff::{modified_hausdorff_distance, Dissimilarity, ModifiedHausdorff};
pub use points::PointSet;
