use oneshot_classifier::image::io::save_grayscale_u8;
use oneshot_classifier::image::GrayImageU8;
use std::path::Path;

pub const SIZE: usize = 32;

/// Simple glyph shapes drawn in black on a white canvas.
#[derive(Clone, Copy, Debug)]
pub enum Glyph {
    VerticalBar,
    HorizontalBar,
    Cross,
    Diagonal,
    Blank,
}

/// Render `glyph` offset by `(dx, dy)` pixels from the canvas center.
pub fn glyph_u8(glyph: Glyph, dx: isize, dy: isize) -> Vec<u8> {
    let mut img = vec![255u8; SIZE * SIZE];
    let c = (SIZE / 2) as isize;
    let mut ink = |x: isize, y: isize| {
        let (x, y) = (x + dx, y + dy);
        assert!(
            (0..SIZE as isize).contains(&x) && (0..SIZE as isize).contains(&y),
            "glyph leaves the canvas"
        );
        img[y as usize * SIZE + x as usize] = 0;
    };
    match glyph {
        Glyph::VerticalBar => (-8..=8).for_each(|t| ink(c, c + t)),
        Glyph::HorizontalBar => (-8..=8).for_each(|t| ink(c + t, c)),
        Glyph::Cross => (-6..=6).for_each(|t| {
            ink(c, c + t);
            ink(c + t, c);
        }),
        Glyph::Diagonal => (-7..=7).for_each(|t| ink(c + t, c + t)),
        Glyph::Blank => {}
    }
    img
}

pub fn write_glyph(root: &Path, identifier: &str, glyph: Glyph, dx: isize, dy: isize) {
    let buffer = GrayImageU8::new(SIZE, SIZE, glyph_u8(glyph, dx, dy));
    save_grayscale_u8(&buffer, &root.join(identifier)).expect("write glyph png");
}
