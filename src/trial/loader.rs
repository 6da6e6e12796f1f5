use crate::error::Result;
use crate::image::io::load_grayscale_image;
use crate::shape::{extract_point_set, Ink, PointSet};
use std::path::PathBuf;

/// Turns a file identifier from a label file into a point set.
pub trait ShapeLoader: Send + Sync {
    fn load(&self, identifier: &str) -> Result<PointSet>;
}

/// Decodes images below `root` and extracts their foreground points.
#[derive(Clone, Debug)]
pub struct FileShapeLoader {
    root: PathBuf,
    ink: Ink,
}

impl FileShapeLoader {
    pub fn new(root: impl Into<PathBuf>, ink: Ink) -> Self {
        Self {
            root: root.into(),
            ink,
        }
    }
}

impl ShapeLoader for FileShapeLoader {
    fn load(&self, identifier: &str) -> Result<PointSet> {
        let gray = load_grayscale_image(&self.root.join(identifier))?;
        extract_point_set(&gray.as_view(), self.ink)
    }
}
