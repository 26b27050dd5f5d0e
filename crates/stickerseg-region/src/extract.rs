//! Sticker extraction
//!
//! Cuts one region out of the source image as a standalone RGBA image.
//! The source buffer is only read.

use crate::error::RegionResult;
use crate::region::Region;
use stickerseg_core::{RgbaImage, RgbaView};

/// Extract a region as an image sized exactly to its bbox.
///
/// Pixels are copied in region-local coordinates. Pixels outside the
/// region's mask keep their color bytes but get alpha 0.
///
/// # Errors
///
/// Returns [`crate::RegionError::MaskSizeMismatch`] if the region was not
/// labeled on a canvas of the source's size.
///
/// # Examples
///
/// ```
/// use stickerseg_core::RgbaImage;
/// use stickerseg_region::{ConnectivityType, extract_region, label_regions};
///
/// let mut img = RgbaImage::new(6, 6).unwrap();
/// img.set_rgba(2, 3, 9, 9, 9, 255).unwrap();
/// img.set_rgba(3, 3, 9, 9, 9, 255).unwrap();
///
/// let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
/// let sticker = extract_region(&regions[0], &img.as_view()).unwrap();
/// assert_eq!((sticker.width(), sticker.height()), (2, 1));
/// ```
pub fn extract_region(region: &Region, source: &RgbaView<'_>) -> RegionResult<RgbaImage> {
    region.check_canvas(source.width(), source.height())?;

    let bx = region.bbox.x as u32;
    let by = region.bbox.y as u32;
    let w = region.bbox.w as u32;
    let h = region.bbox.h as u32;

    let mut out = RgbaImage::new(w, h)?;
    for j in 0..h {
        let src_row = source.row(by + j);
        let start = bx as usize * 4;
        let dst_row = out.row_mut(j);
        dst_row.copy_from_slice(&src_row[start..start + w as usize * 4]);

        for i in 0..w {
            if !region.mask.get_unchecked(bx + i, by + j) {
                dst_row[i as usize * 4 + 3] = 0;
            }
        }
    }

    Ok(out)
}

/// Extract a region with a transparent margin of `padding` pixels.
///
/// The output is `(w + 2 * padding) x (h + 2 * padding)`. Only pixels in
/// the region's mask are copied; everything else is transparent black.
pub fn extract_region_padded(
    region: &Region,
    source: &RgbaView<'_>,
    padding: u32,
) -> RegionResult<RgbaImage> {
    region.check_canvas(source.width(), source.height())?;

    let bx = region.bbox.x as u32;
    let by = region.bbox.y as u32;
    let w = region.bbox.w as u32;
    let h = region.bbox.h as u32;

    let mut out = RgbaImage::new(w + 2 * padding, h + 2 * padding)?;
    for j in 0..h {
        for i in 0..w {
            if region.mask.get_unchecked(bx + i, by + j) {
                let (r, g, b, a) = source.get_rgba_unchecked(bx + i, by + j);
                out.set_rgba_unchecked(i + padding, j + padding, r, g, b, a);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conncomp::ConnectivityType;
    use crate::label::label_regions;
    use crate::region::Region;
    use stickerseg_core::{Box, Mask};

    /// 6x6 image: an L-shaped region plus a separate pixel inside its bbox
    fn source() -> RgbaImage {
        let mut img = RgbaImage::new(6, 6).unwrap();
        for y in 1..5 {
            img.set_rgba(1, y, 10, 20, 30, 255).unwrap();
        }
        for x in 2..5 {
            img.set_rgba(x, 4, 40, 50, 60, 200).unwrap();
        }
        img.set_rgba(3, 2, 70, 80, 90, 255).unwrap();
        img
    }

    #[test]
    fn test_extract_masks_out_foreign_pixels() {
        let img = source();
        let view = img.as_view();
        let regions = label_regions(&view, 16, ConnectivityType::FourWay).unwrap();
        assert_eq!(regions.len(), 2);

        let l_shape = &regions[0];
        assert_eq!(l_shape.bbox, Box::new_unchecked(1, 1, 4, 4));
        let sticker = extract_region(l_shape, &view).unwrap();
        assert_eq!((sticker.width(), sticker.height()), (4, 4));

        assert_eq!(sticker.get_rgba(0, 0), Some((10, 20, 30, 255)));
        assert_eq!(sticker.get_rgba(3, 3), Some((40, 50, 60, 200)));
        // The lone pixel sits inside the bbox but belongs to another region:
        // its color is copied, its alpha cleared.
        assert_eq!(sticker.get_rgba(2, 1), Some((70, 80, 90, 0)));
        assert_eq!(sticker.get_rgba(1, 0), Some((0, 0, 0, 0)));

        // Source untouched
        assert_eq!(img, source());
    }

    #[test]
    fn test_extract_padded() {
        let img = source();
        let view = img.as_view();
        let regions = label_regions(&view, 16, ConnectivityType::FourWay).unwrap();
        let sticker = extract_region_padded(&regions[0], &view, 2).unwrap();

        assert_eq!((sticker.width(), sticker.height()), (8, 8));
        assert_eq!(sticker.get_rgba(2, 2), Some((10, 20, 30, 255)));
        // Foreign pixel fully cleared when padding
        assert_eq!(sticker.get_rgba(4, 3), Some((0, 0, 0, 0)));
        // Margin is transparent
        for i in 0..8 {
            assert_eq!(sticker.get_rgba(i, 0).map(|p| p.3), Some(0));
            assert_eq!(sticker.get_rgba(0, i).map(|p| p.3), Some(0));
            assert_eq!(sticker.get_rgba(7, i).map(|p| p.3), Some(0));
        }
        assert_eq!(sticker.as_view().count_foreground(0), 7);
    }

    #[test]
    fn test_extract_padding_zero_matches_alpha_of_plain() {
        let img = source();
        let view = img.as_view();
        let regions = label_regions(&view, 16, ConnectivityType::FourWay).unwrap();
        let plain = extract_region(&regions[0], &view).unwrap();
        let padded = extract_region_padded(&regions[0], &view, 0).unwrap();
        let alpha = |im: &RgbaImage| im.data().chunks(4).map(|p| p[3]).collect::<Vec<_>>();
        assert_eq!(alpha(&plain), alpha(&padded));
    }

    #[test]
    fn test_extract_rejects_wrong_canvas() {
        let img = source();
        let mut mask = Mask::new(5, 5).unwrap();
        mask.set(1, 1).unwrap();
        let region = Region::from_mask(1, mask).unwrap();
        assert!(extract_region(&region, &img.as_view()).is_err());
        assert!(extract_region_padded(&region, &img.as_view(), 1).is_err());
    }
}
