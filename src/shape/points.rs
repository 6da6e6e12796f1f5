use crate::error::{Error, Result};
use nalgebra::{Point2, Vector2};

/// Non-empty set of 2D coordinates describing one glyph.
///
/// Coordinates are `(row, column)` pairs. Sets produced by the extractor are
/// translated so their centroid sits at the origin. Point order carries no
/// meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Point2<f64>>,
}

impl PointSet {
    /// Wrap the points as given. Fails with `EmptyShape` on an empty input.
    pub fn new(points: Vec<Point2<f64>>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyShape);
        }
        Ok(Self { points })
    }

    /// Translate the points so their centroid is the origin.
    pub fn centered(mut points: Vec<Point2<f64>>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyShape);
        }
        let c = centroid_of(&points);
        for p in &mut points {
            *p -= c;
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Point2<f64> {
        Point2::from(centroid_of(&self.points))
    }
}

fn centroid_of(points: &[Point2<f64>]) -> Vector2<f64> {
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    sum / points.len() as f64
}
