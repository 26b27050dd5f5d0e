//! Region labeling
//!
//! Splits the foreground of an RGBA image into maximal connected regions.
//! A pixel is foreground iff its alpha is strictly greater than the alpha
//! threshold.
//!
//! The image is raster-scanned; every unvisited foreground pixel seeds a
//! breadth-first flood fill driven by an explicit queue, so region size is
//! bounded by memory rather than stack depth. Region ids are 1..N in the
//! raster order of each region's first pixel, which makes relabeling the
//! same buffer reproducible.

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use crate::region::Region;
use std::collections::VecDeque;
use stickerseg_core::{Box, Mask, RgbaView};

/// Label every connected foreground region of `view`.
///
/// Returns the regions in discovery order with `blur_score == None`. An
/// image without foreground pixels yields an empty list.
///
/// # Examples
///
/// ```
/// use stickerseg_core::RgbaImage;
/// use stickerseg_region::{ConnectivityType, label_regions};
///
/// let mut img = RgbaImage::new(10, 10).unwrap();
/// img.set_rgba(1, 1, 0, 0, 0, 255).unwrap();
/// img.set_rgba(8, 8, 0, 0, 0, 255).unwrap();
///
/// let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
/// assert_eq!(regions.len(), 2);
/// assert_eq!(regions[0].id, 1);
/// ```
pub fn label_regions(
    view: &RgbaView<'_>,
    alpha_threshold: u8,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<Region>> {
    let width = view.width();
    let height = view.height();

    // Call-scoped; dropped on return
    let mut visited = Mask::new(width, height)?;
    let mut queue = VecDeque::new();
    let mut regions = Vec::new();

    let is_foreground =
        |x: u32, y: u32| view.is_foreground(y as usize * width as usize + x as usize, alpha_threshold);

    for y in 0..height {
        for x in 0..width {
            if visited.get_unchecked(x, y) || !is_foreground(x, y) {
                continue;
            }

            let mut mask = Mask::new(width, height)?;
            let mut area = 0u32;
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);

            visited.set_unchecked(x, y);
            queue.push_back((x, y));

            while let Some((cx, cy)) = queue.pop_front() {
                mask.set_unchecked(cx, cy);
                area += 1;

                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);

                for (nx, ny) in connectivity.neighbors(cx, cy, width, height) {
                    if !visited.get_unchecked(nx, ny) && is_foreground(nx, ny) {
                        visited.set_unchecked(nx, ny);
                        queue.push_back((nx, ny));
                    }
                }
            }

            regions.push(Region {
                id: regions.len() as u32 + 1,
                bbox: Box::from_extremes(min_x, min_y, max_x, max_y),
                area,
                mask,
                blur_score: None,
            });
        }
    }

    Ok(regions)
}

/// Count connected foreground regions without keeping their masks.
pub fn count_regions(
    view: &RgbaView<'_>,
    alpha_threshold: u8,
    connectivity: ConnectivityType,
) -> RegionResult<usize> {
    let width = view.width();
    let height = view.height();

    let mut visited = Mask::new(width, height)?;
    let mut queue = VecDeque::new();
    let mut count = 0;

    let is_foreground =
        |x: u32, y: u32| view.is_foreground(y as usize * width as usize + x as usize, alpha_threshold);

    for y in 0..height {
        for x in 0..width {
            if visited.get_unchecked(x, y) || !is_foreground(x, y) {
                continue;
            }
            count += 1;
            visited.set_unchecked(x, y);
            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                for (nx, ny) in connectivity.neighbors(cx, cy, width, height) {
                    if !visited.get_unchecked(nx, ny) && is_foreground(nx, ny) {
                        visited.set_unchecked(nx, ny);
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickerseg_core::RgbaImage;

    fn image_with_blocks(w: u32, h: u32, blocks: &[(u32, u32, u32, u32)]) -> RgbaImage {
        let mut img = RgbaImage::new(w, h).unwrap();
        for &(bx, by, bw, bh) in blocks {
            for y in by..by + bh {
                for x in bx..bx + bw {
                    img.set_rgba(x, y, 200, 100, 50, 255).unwrap();
                }
            }
        }
        img
    }

    #[test]
    fn test_fully_opaque_image() {
        let img = image_with_blocks(10, 10, &[(0, 0, 10, 10)]);
        let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].id, 1);
        assert_eq!(regions[0].area, 100);
        assert_eq!(regions[0].bbox, Box::new_unchecked(0, 0, 10, 10));
    }

    #[test]
    fn test_fully_transparent_image() {
        let img = RgbaImage::new(12, 7).unwrap();
        let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
        assert!(regions.is_empty());
        assert_eq!(
            count_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap(),
            0
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut img = RgbaImage::new(3, 1).unwrap();
        img.set_rgba(0, 0, 0, 0, 0, 16).unwrap();
        img.set_rgba(2, 0, 0, 0, 0, 17).unwrap();
        let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bbox, Box::new_unchecked(2, 0, 1, 1));
    }

    #[test]
    fn test_diagonal_connectivity() {
        let img = image_with_blocks(6, 6, &[(0, 0, 3, 3), (3, 3, 3, 3)]);
        let view = img.as_view();

        let eight = label_regions(&view, 16, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].area, 18);

        let four = label_regions(&view, 16, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.len(), 2);
        assert_eq!(four[0].bbox, Box::new_unchecked(0, 0, 3, 3));
        assert_eq!(four[1].bbox, Box::new_unchecked(3, 3, 3, 3));
        assert_eq!(count_regions(&view, 16, ConnectivityType::FourWay).unwrap(), 2);
    }

    #[test]
    fn test_ids_follow_raster_discovery_order() {
        // The block whose first pixel comes first in raster order gets id 1,
        // even though it is lower on its left edge.
        let img = image_with_blocks(10, 10, &[(6, 0, 2, 2), (0, 1, 5, 5)]);
        let regions = label_regions(&img.as_view(), 0, ConnectivityType::FourWay).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id, 1);
        assert_eq!(regions[0].bbox.x, 6);
        assert_eq!(regions[1].id, 2);
        assert_eq!(regions[1].area, 25);
    }

    #[test]
    fn test_u_shape_is_one_region() {
        // Two arms joined only at the bottom: the BFS must walk around
        let mut img = RgbaImage::new(5, 5).unwrap();
        for y in 0..5 {
            img.set_rgba(0, y, 0, 0, 0, 255).unwrap();
            img.set_rgba(4, y, 0, 0, 0, 255).unwrap();
        }
        for x in 0..5 {
            img.set_rgba(x, 4, 0, 0, 0, 255).unwrap();
        }
        let regions = label_regions(&img.as_view(), 0, ConnectivityType::FourWay).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area, 13);
        assert_eq!(regions[0].mask.count(), 13);
        assert_eq!(regions[0].bbox, Box::new_unchecked(0, 0, 5, 5));
    }

    #[test]
    fn test_large_single_region_does_not_overflow_stack() {
        let img = image_with_blocks(600, 600, &[(0, 0, 600, 600)]);
        let regions = label_regions(&img.as_view(), 16, ConnectivityType::FourWay).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area, 360_000);
    }
}
