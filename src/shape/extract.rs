use super::PointSet;
use crate::error::Result;
use crate::image::ImageView;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Which pixels count as the glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ink {
    /// Black strokes on a white background: a pixel is foreground iff it is 0.
    #[default]
    Dark,
    /// Bright strokes on a black background: any nonzero pixel is foreground.
    Light,
}

impl Ink {
    #[inline]
    pub fn is_foreground(self, value: u8) -> bool {
        match self {
            Ink::Dark => value == 0,
            Ink::Light => value != 0,
        }
    }
}

/// Convert an image into the centered `(row, column)` coordinates of its
/// foreground pixels.
///
/// Fails with `EmptyShape` when no pixel is foreground.
pub fn extract_point_set<I>(image: &I, ink: Ink) -> Result<PointSet>
where
    I: ImageView<Pixel = u8>,
{
    let mut points = Vec::new();
    for (y, row) in image.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if ink.is_foreground(v) {
                points.push(Point2::new(y as f64, x as f64));
            }
        }
    }
    PointSet::centered(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::image::ImageU8;

    #[test]
    fn dark_pixels_become_centered_points() {
        // 3x4, strokes at (0,1), (2,1), (2,3)
        #[rustfmt::skip]
        let data = [
            255, 0, 255, 255,
            255, 255, 255, 255,
            255, 0, 255, 0,
        ];
        let img = ImageU8::packed(4, 3, &data);
        let set = extract_point_set(&img, Ink::Dark).unwrap();
        assert_eq!(set.len(), 3);

        let c = set.centroid();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
        // mean row = 4/3, mean col = 5/3
        let first = set.points()[0];
        assert!((first.x - (0.0 - 4.0 / 3.0)).abs() < 1e-12);
        assert!((first.y - (1.0 - 5.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn light_ink_inverts_the_rule() {
        let data = [0u8, 7, 0, 0];
        let img = ImageU8::packed(2, 2, &data);
        let set = extract_point_set(&img, Ink::Light).unwrap();
        assert_eq!(set.points(), &[Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn blank_image_is_an_empty_shape() {
        let data = [255u8; 16];
        let img = ImageU8::packed(4, 4, &data);
        assert!(matches!(
            extract_point_set(&img, Ink::Dark),
            Err(Error::EmptyShape)
        ));
    }
}
