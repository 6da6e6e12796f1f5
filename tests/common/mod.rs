#![allow(dead_code)]

pub mod synthetic_image;

use std::fs;
use std::path::Path;
use synthetic_image::{write_glyph, Glyph};

pub const CLASSES: [Glyph; 4] = [
    Glyph::VerticalBar,
    Glyph::HorizontalBar,
    Glyph::Cross,
    Glyph::Diagonal,
];

/// Write trial `run` below `root`: one shifted query per class, one training
/// image per class, and a label file pairing query `i` with `answers[i]`.
pub fn write_trial(root: &Path, run: &str, answers: &[usize]) {
    let mut labels = String::new();
    for (k, glyph) in CLASSES.iter().enumerate() {
        let query = format!("{run}/test/item{:02}.png", k + 1);
        let train = format!("{run}/training/class{:02}.png", k + 1);
        write_glyph(root, &query, *glyph, (k as isize) - 1, 2 - k as isize);
        write_glyph(root, &train, *glyph, 0, 0);
        labels.push_str(&format!(
            "{query} {run}/training/class{:02}.png\n",
            answers[k] + 1
        ));
    }
    fs::write(root.join(run).join("class_labels.txt"), labels).expect("write labels");
}
