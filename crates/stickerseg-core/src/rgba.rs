//! RGBA8 image buffers
//!
//! [`RgbaView`] borrows a caller-owned RGBA8 buffer read-only and is the
//! alpha sampler used by the labeler. [`RgbaImage`] owns its pixels and is
//! what extraction produces.
//!
//! # Pixel layout
//!
//! - 4 bytes per pixel in R, G, B, A order
//! - Rows are stored top to bottom with no padding
//! - `data.len() == width * height * 4`

use crate::error::{Error, Result};

/// Number of bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset of the alpha byte within a pixel
pub const ALPHA: usize = 3;

/// Check dimensions and buffer length, returning the pixel count.
fn validate(len: usize, width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::InvalidDimension { width, height })?;
    if len != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(expected / BYTES_PER_PIXEL)
}

/// Borrowed, validated view over an RGBA8 buffer.
#[derive(Debug, Clone, Copy)]
pub struct RgbaView<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Wrap an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero, and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        validate(data.len(), width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Get the alpha value of the pixel at raster index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pixel_count()`.
    #[inline]
    pub fn alpha_at(&self, index: usize) -> u8 {
        self.data[index * BYTES_PER_PIXEL + ALPHA]
    }

    /// Get the alpha value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.alpha_at(y as usize * self.width as usize + x as usize))
    }

    /// Check whether the pixel at raster index `index` is foreground.
    ///
    /// A pixel is foreground iff its alpha is strictly greater than
    /// `alpha_threshold`.
    #[inline]
    pub fn is_foreground(&self, index: usize, alpha_threshold: u8) -> bool {
        self.alpha_at(index) > alpha_threshold
    }

    /// Count the foreground pixels of the whole image.
    pub fn count_foreground(&self, alpha_threshold: u8) -> usize {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[ALPHA] > alpha_threshold)
            .count()
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get RGBA values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.data[i..i + BYTES_PER_PIXEL];
        (px[0], px[1], px[2], px[3])
    }

    /// Get the bytes of one row.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Copy the view into an owned image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

/// Owned RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a fully transparent (all-zero) image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Take ownership of an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Same validation as [`RgbaView::new`].
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        validate(data.len(), width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the raw RGBA bytes mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image, returning its buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the image as a view.
    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.as_view().get_rgba(x, y)
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_rgba_unchecked(x, y, r, g, b, a);
        Ok(())
    }

    /// Set an RGBA pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, a]);
    }

    /// Get the bytes of one row mutably.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_validation() {
        let data = vec![0u8; 10 * 10 * 4];
        assert!(RgbaView::new(&data, 10, 10).is_ok());
        assert!(matches!(
            RgbaView::new(&data, 0, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            RgbaView::new(&data, 10, 9),
            Err(Error::BufferSizeMismatch {
                expected: 360,
                actual: 400
            })
        ));
    }

    #[test]
    fn test_alpha_sampling() {
        let mut img = RgbaImage::new(4, 3).unwrap();
        img.set_rgba(2, 1, 10, 20, 30, 200).unwrap();
        let view = img.as_view();

        assert_eq!(view.alpha(2, 1), Some(200));
        assert_eq!(view.alpha(0, 0), Some(0));
        assert_eq!(view.alpha(4, 0), None);
        assert_eq!(view.alpha_at(6), 200);

        assert!(view.is_foreground(6, 16));
        assert!(!view.is_foreground(6, 200)); // strictly greater
        assert!(!view.is_foreground(0, 0));
        assert_eq!(view.count_foreground(16), 1);
    }

    #[test]
    fn test_rgba_access() {
        let mut img = RgbaImage::new(2, 2).unwrap();
        img.set_rgba(1, 1, 1, 2, 3, 4).unwrap();
        assert_eq!(img.get_rgba(1, 1), Some((1, 2, 3, 4)));
        assert_eq!(img.get_rgba(2, 0), None);
        assert!(img.set_rgba(2, 0, 0, 0, 0, 0).is_err());
        assert_eq!(&img.as_view().row(1)[4..], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let raw: Vec<u8> = (0..16).collect();
        let img = RgbaImage::from_raw(raw.clone(), 2, 2).unwrap();
        assert_eq!(img.as_view().to_image(), img);
        assert_eq!(img.into_raw(), raw);
        assert!(RgbaImage::from_raw(vec![0; 15], 2, 2).is_err());
    }
}
