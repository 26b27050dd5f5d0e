//! Blur scoring
//!
//! Measures how sharp a rectangle of an image is as the mean absolute
//! Laplacian response of its luminance. Higher means more high-frequency
//! detail; flat or out-of-focus areas score near zero.
//!
//! The score covers the whole rectangle of the raw image, independent of
//! which pixels belong to a region.

use crate::kernel::Kernel;
use crate::luminance::LuminanceField;
use crate::{FilterError, FilterResult};
use stickerseg_core::{Box, RgbaView};

/// Mean absolute kernel response over the positions where the kernel fits
/// entirely inside the field.
///
/// Returns 0 when the kernel fits nowhere.
pub fn kernel_energy(field: &LuminanceField, kernel: &Kernel) -> f64 {
    let (fw, fh) = (field.width(), field.height());
    let (kw, kh) = (kernel.width(), kernel.height());
    if fw < kw || fh < kh {
        return 0.0;
    }
    let (kcx, kcy) = (kernel.center_x(), kernel.center_y());

    let mut sum = 0.0f64;
    let mut count = 0u64;
    for y in kcy..fh - (kh - 1 - kcy) {
        for x in kcx..fw - (kw - 1 - kcx) {
            let mut response = 0.0f64;
            for ky in 0..kh {
                for kx in 0..kw {
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    if k != 0.0 {
                        let v = field.get_unchecked(x + kx - kcx, y + ky - kcy);
                        response += v * k as f64;
                    }
                }
            }
            sum += response.abs();
            count += 1;
        }
    }

    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Compute the sharpness score of `bbox` within `view`.
///
/// Every pixel strictly inside the box (the 1-pixel border excluded) gets
/// the 3x3 Laplacian of luminance; the score is the mean absolute response.
/// Boxes with `w <= 2` or `h <= 2` have no interior and score 0.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if the box is not fully inside
/// the image.
///
/// # Examples
///
/// ```
/// use stickerseg_core::{Box, RgbaImage};
/// use stickerseg_filter::blur_score;
///
/// let img = RgbaImage::new(5, 5).unwrap();
/// let score = blur_score(&img.as_view(), &Box::new_unchecked(0, 0, 5, 5)).unwrap();
/// assert_eq!(score, 0.0); // flat image
/// ```
pub fn blur_score(view: &RgbaView<'_>, bbox: &Box) -> FilterResult<f64> {
    let bounds = Box::new_unchecked(0, 0, view.width() as i32, view.height() as i32);
    if !bounds.contains_box(bbox) {
        return Err(FilterError::InvalidParameters(format!(
            "bbox {:?} not inside {}x{} image",
            bbox,
            view.width(),
            view.height()
        )));
    }
    if bbox.w <= 2 || bbox.h <= 2 {
        return Ok(0.0);
    }

    let field = LuminanceField::from_rect(view, bbox)?;
    Ok(kernel_energy(&field, &Kernel::laplacian()))
}

/// Compute the sharpness score of the whole image.
pub fn blur_score_of_image(view: &RgbaView<'_>) -> FilterResult<f64> {
    let bounds = Box::new_unchecked(0, 0, view.width() as i32, view.height() as i32);
    blur_score(view, &bounds)
}
