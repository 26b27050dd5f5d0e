//! Candidate sticker regions

use crate::error::{RegionError, RegionResult};
use stickerseg_core::{Box, Mask};

/// A connected set of foreground pixels and its derived metadata.
///
/// `area` always equals the number of set bits in `mask`, and `bbox` is the
/// tightest rectangle around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Identifier, unique within one segmentation run
    pub id: u32,
    /// Bounding box in source-image coordinates
    pub bbox: Box,
    /// Number of pixels in the region
    pub area: u32,
    /// Membership over the full source canvas
    pub mask: Mask,
    /// Sharpness of the bbox; `None` until scored
    pub blur_score: Option<f64>,
}

impl Region {
    /// Build a region from a mask, deriving its bbox and area.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if the mask is empty.
    pub fn from_mask(id: u32, mask: Mask) -> RegionResult<Self> {
        let bbox = mask.bounding_box().ok_or_else(|| {
            RegionError::InvalidParameters(format!("region {} has an empty mask", id))
        })?;
        Ok(Self {
            id,
            bbox,
            area: mask.count(),
            mask,
            blur_score: None,
        })
    }

    /// Canvas size the mask covers
    #[inline]
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.mask.width(), self.mask.height())
    }

    /// Check whether the pixel (x, y) belongs to this region
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.mask.get(x, y)
    }

    /// Ensure the mask covers a `width` x `height` canvas
    pub(crate) fn check_canvas(&self, width: u32, height: u32) -> RegionResult<()> {
        if self.canvas_size() != (width, height) {
            return Err(RegionError::MaskSizeMismatch {
                expected: (width, height),
                actual: self.canvas_size(),
            });
        }
        Ok(())
    }
}

/// Sort regions by area, largest first.
///
/// The sort is stable: regions of equal area keep their relative order.
pub fn sort_by_area(regions: &mut [Region]) {
    regions.sort_by(|a, b| b.area.cmp(&a.area));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with(w: u32, h: u32, pts: &[(u32, u32)]) -> Mask {
        let mut m = Mask::new(w, h).unwrap();
        for &(x, y) in pts {
            m.set(x, y).unwrap();
        }
        m
    }

    #[test]
    fn test_from_mask() {
        let r = Region::from_mask(3, mask_with(10, 10, &[(2, 2), (4, 5), (3, 3)])).unwrap();
        assert_eq!(r.id, 3);
        assert_eq!(r.area, 3);
        assert_eq!(r.bbox, Box::new_unchecked(2, 2, 3, 4));
        assert!(r.blur_score.is_none());
        assert!(r.contains(4, 5));
        assert!(!r.contains(4, 4));
        assert_eq!(r.canvas_size(), (10, 10));
    }

    #[test]
    fn test_from_empty_mask_is_error() {
        assert!(Region::from_mask(1, Mask::new(4, 4).unwrap()).is_err());
    }

    #[test]
    fn test_sort_by_area_is_stable() {
        let mut regions = vec![
            Region::from_mask(1, mask_with(8, 8, &[(0, 0)])).unwrap(),
            Region::from_mask(2, mask_with(8, 8, &[(2, 2), (3, 2), (4, 2)])).unwrap(),
            Region::from_mask(3, mask_with(8, 8, &[(6, 6)])).unwrap(),
        ];
        sort_by_area(&mut regions);
        let ids: Vec<_> = regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_check_canvas() {
        let r = Region::from_mask(1, mask_with(8, 6, &[(1, 1)])).unwrap();
        assert!(r.check_canvas(8, 6).is_ok());
        assert!(matches!(
            r.check_canvas(6, 8),
            Err(RegionError::MaskSizeMismatch { .. })
        ));
    }
}
