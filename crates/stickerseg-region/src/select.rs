//! Region selection by size and sharpness
//!
//! Every selector is non-destructive and order-preserving: it returns the
//! kept regions in their input order and leaves the input untouched.

use crate::region::Region;

/// Keep regions with `area >= min_area` whose blur score, when present, is
/// at least `blur_threshold`.
///
/// Unscored regions pass the sharpness test.
pub fn select_regions(regions: &[Region], min_area: u32, blur_threshold: f64) -> Vec<Region> {
    regions
        .iter()
        .filter(|r| passes_area(r, min_area) && passes_sharpness(r, blur_threshold))
        .cloned()
        .collect()
}

/// Keep regions with `area >= min_area`.
pub fn select_by_area(regions: &[Region], min_area: u32) -> Vec<Region> {
    regions
        .iter()
        .filter(|r| passes_area(r, min_area))
        .cloned()
        .collect()
}

/// Keep regions that are unscored or score at least `blur_threshold`.
pub fn select_by_sharpness(regions: &[Region], blur_threshold: f64) -> Vec<Region> {
    regions
        .iter()
        .filter(|r| passes_sharpness(r, blur_threshold))
        .cloned()
        .collect()
}

#[inline]
fn passes_area(region: &Region, min_area: u32) -> bool {
    region.area >= min_area
}

#[inline]
fn passes_sharpness(region: &Region, blur_threshold: f64) -> bool {
    region.blur_score.is_none_or(|s| s >= blur_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickerseg_core::Mask;

    fn region(id: u32, area: u32, blur_score: Option<f64>) -> Region {
        let mut mask = Mask::new(64, 64).unwrap();
        for i in 0..area {
            mask.set(i % 64, i / 64).unwrap();
        }
        let mut r = Region::from_mask(id, mask).unwrap();
        r.blur_score = blur_score;
        r
    }

    fn ids(regions: &[Region]) -> Vec<u32> {
        regions.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_select_regions() {
        let regions = vec![
            region(1, 50, Some(20.0)),
            region(2, 5, Some(100.0)), // too small
            region(3, 80, Some(3.0)), // too blurry
            region(4, 10, None), // unscored passes sharpness
            region(5, 10, Some(15.0)), // threshold is inclusive
        ];
        let kept = select_regions(&regions, 10, 15.0);
        assert_eq!(ids(&kept), vec![1, 4, 5]);
        // Input untouched
        assert_eq!(regions.len(), 5);
    }

    #[test]
    fn test_select_halves() {
        let regions = vec![region(1, 50, Some(1.0)), region(2, 5, Some(100.0))];
        assert_eq!(ids(&select_by_area(&regions, 10)), vec![1]);
        assert_eq!(ids(&select_by_sharpness(&regions, 10.0)), vec![2]);
    }

    #[test]
    fn test_select_nothing_survives() {
        let regions = vec![region(1, 9, None), region(2, 9, None)];
        assert!(select_regions(&regions, 10, 0.0).is_empty());
        assert!(select_regions(&[], 0, 0.0).is_empty());
    }
}
