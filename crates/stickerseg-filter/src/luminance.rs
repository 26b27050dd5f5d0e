//! Luminance fields
//!
//! Converts RGBA pixels to luma (ITU-R BT.601 weights). Alpha is ignored:
//! sharpness is measured on the raw color data.

use crate::{FilterError, FilterResult};
use stickerseg_core::{Box, RgbaView};

/// Luma of an RGB triple: `0.299 R + 0.587 G + 0.114 B`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Luminance values of a rectangle cut from an RGBA image.
#[derive(Debug, Clone)]
pub struct LuminanceField {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl LuminanceField {
    /// Compute the luminance of every pixel inside `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `rect` is empty or not
    /// fully inside the image.
    pub fn from_rect(view: &RgbaView<'_>, rect: &Box) -> FilterResult<Self> {
        let bounds = Box::new_unchecked(0, 0, view.width() as i32, view.height() as i32);
        if rect.is_empty() || !bounds.contains_box(rect) {
            return Err(FilterError::InvalidParameters(format!(
                "rectangle {:?} not inside {}x{} image",
                rect,
                view.width(),
                view.height()
            )));
        }

        let (x0, y0) = (rect.x as u32, rect.y as u32);
        let (w, h) = (rect.w as u32, rect.h as u32);
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                let (r, g, b, _) = view.get_rgba_unchecked(x, y);
                data.push(luminance(r, g, b));
            }
        }

        Ok(Self {
            width: w,
            height: h,
            data,
        })
    }

    /// Get the field width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the field height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the luminance at field-local (x, y) without bounds checking.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> f64 {
        self.data[y as usize * self.width as usize + x as usize]
    }
}
