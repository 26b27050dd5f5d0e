//! Synthetic test images
//!
//! The regression tests ship no binary fixtures; these builders produce the
//! alpha-channel images they segment.

use crate::error::TestResult;
use stickerseg_core::RgbaImage;

/// Opaque white
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
/// Opaque black
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Create a fully transparent canvas.
pub fn transparent(width: u32, height: u32) -> TestResult<RgbaImage> {
    Ok(RgbaImage::new(width, height)?)
}

/// Create a canvas filled with one color.
pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new(width, height)?;
    fill_rect(&mut img, 0, 0, width, height, rgba);
    Ok(img)
}

/// Fill the rectangle `[x, x + w) x [y, y + h)`, clipped to the canvas.
pub fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, rgba: [u8; 4]) {
    let [r, g, b, a] = rgba;
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.set_rgba_unchecked(px, py, r, g, b, a);
        }
    }
}

/// Fill a rectangle with a black/white checkerboard at the given alpha.
///
/// Checkerboards have the maximum Laplacian response, so regions drawn
/// with them always pass a blur threshold.
pub fn checker_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, alpha: u8) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            let v = if (px + py) % 2 == 0 { 255 } else { 0 };
            img.set_rgba_unchecked(px, py, v, v, v, alpha);
        }
    }
}

/// Build an image from ASCII art.
///
/// Each string is one row. `#` is an opaque checker pixel, `o` an opaque
/// flat gray pixel, digits `1`..`9` are flat gray with alpha `digit * 25`,
/// and anything else is fully transparent.
pub fn from_ascii(rows: &[&str]) -> TestResult<RgbaImage> {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    let mut img = RgbaImage::new(width, height)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.bytes().enumerate() {
            let (x, y) = (x as u32, y as u32);
            match c {
                b'#' => {
                    let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                    img.set_rgba_unchecked(x, y, v, v, v, 255);
                }
                b'o' => img.set_rgba_unchecked(x, y, 128, 128, 128, 255),
                b'1'..=b'9' => img.set_rgba_unchecked(x, y, 128, 128, 128, (c - b'0') * 25),
                _ => {}
            }
        }
    }
    Ok(img)
}

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, bound)`; `bound` must be non-zero
    pub fn below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are the well-distributed ones
        ((self.next_u64() >> 33) % bound as u64) as u32
    }
}

/// Create a canvas of random noise with random alpha.
///
/// Roughly `density_percent`% of the pixels get a random non-zero alpha;
/// the rest stay transparent. Colors are random, so blobs are sharp.
pub fn random_blobs(
    width: u32,
    height: u32,
    density_percent: u32,
    seed: u64,
) -> TestResult<RgbaImage> {
    let mut rng = SimpleRng::new(seed);
    let mut img = RgbaImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            if rng.below(100) < density_percent {
                let r = rng.below(256) as u8;
                let g = rng.below(256) as u8;
                let b = rng.below(256) as u8;
                let a = 1 + rng.below(255) as u8;
                img.set_rgba_unchecked(x, y, r, g, b, a);
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        let img = from_ascii(&["#..", ".o5"]).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.get_rgba(0, 0), Some((255, 255, 255, 255)));
        assert_eq!(img.get_rgba(1, 0), Some((0, 0, 0, 0)));
        assert_eq!(img.get_rgba(1, 1), Some((128, 128, 128, 255)));
        assert_eq!(img.get_rgba(2, 1), Some((128, 128, 128, 125)));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut img = transparent(4, 4).unwrap();
        fill_rect(&mut img, 2, 2, 10, 10, WHITE);
        assert_eq!(img.as_view().count_foreground(0), 4);
    }

    #[test]
    fn test_random_blobs_reproducible() {
        let a = random_blobs(16, 16, 40, 7).unwrap();
        let b = random_blobs(16, 16, 40, 7).unwrap();
        let c = random_blobs(16, 16, 40, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
