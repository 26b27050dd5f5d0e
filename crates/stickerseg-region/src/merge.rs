//! Small-region merging
//!
//! Absorbs small fragments into an adjacent, clearly larger region.
//!
//! Regions are visited largest first. Each region not yet absorbed becomes a
//! host and absorbs every other unabsorbed region that is smaller than half
//! of the host's original area and adjacent to the host's original mask.
//! This is one pass: an enlarged host is not re-tested against the regions
//! that remain, and absorbed regions never host or get absorbed again.
//!
//! Regions labeled with the same connectivity are never adjacent to each
//! other (they would have been one region), so merging only changes
//! anything for regions produced with a looser or different connectivity.

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use crate::region::Region;
use log::trace;

/// Check whether two regions touch.
///
/// Regions are adjacent iff some pixel of `a` has a neighbor (per
/// `connectivity`) that belongs to `b`. Regions on different canvases are
/// never adjacent.
pub fn regions_adjacent(a: &Region, b: &Region, connectivity: ConnectivityType) -> bool {
    if a.canvas_size() != b.canvas_size() {
        return false;
    }
    // Neighbors of `a` all lie within its bbox grown by one pixel
    if !a.bbox.expand(1).overlaps(&b.bbox) {
        return false;
    }

    let (width, height) = a.canvas_size();
    for y in a.bbox.y as u32..a.bbox.bottom() as u32 {
        for x in a.bbox.x as u32..a.bbox.right() as u32 {
            if !a.mask.get_unchecked(x, y) {
                continue;
            }
            if connectivity
                .neighbors(x, y, width, height)
                .any(|(nx, ny)| b.mask.get_unchecked(nx, ny))
            {
                return true;
            }
        }
    }
    false
}

/// Merge small regions into adjacent larger ones in a single pass.
///
/// Returns a new list ordered by area descending (as sorted before merging;
/// hosts that grew are not re-sorted). Each emitted region keeps its host's
/// id and has `blur_score == None`, since its bbox may have changed.
///
/// # Errors
///
/// Returns [`crate::RegionError::MaskSizeMismatch`] if the regions do not
/// all cover the same canvas.
pub fn merge_small_regions(
    regions: &[Region],
    connectivity: ConnectivityType,
) -> RegionResult<Vec<Region>> {
    let Some(first) = regions.first() else {
        return Ok(Vec::new());
    };
    let (width, height) = first.canvas_size();
    for r in regions {
        r.check_canvas(width, height)?;
    }

    // Stable, so equal areas keep their input order
    let mut order: Vec<usize> = (0..regions.len()).collect();
    order.sort_by(|&a, &b| regions[b].area.cmp(&regions[a].area));

    let mut consumed = vec![false; regions.len()];
    let mut merged = Vec::with_capacity(regions.len());

    for &hi in &order {
        if consumed[hi] {
            continue;
        }
        consumed[hi] = true;
        let host = &regions[hi];

        let mut mask = host.mask.clone();
        let mut area = host.area;
        let mut bbox = host.bbox;

        for &si in &order {
            if consumed[si] {
                continue;
            }
            let small = &regions[si];
            // area(small) < 0.5 * area(host)
            if 2 * small.area as u64 >= host.area as u64 {
                continue;
            }
            if regions_adjacent(host, small, connectivity) {
                mask.or_assign(&small.mask)?;
                area += small.area;
                bbox = bbox.union(&small.bbox);
                consumed[si] = true;
                trace!(
                    "region {} absorbed region {} (area {})",
                    host.id, small.id, small.area
                );
            }
        }

        merged.push(Region {
            id: host.id,
            bbox,
            area,
            mask,
            blur_score: None,
        });
    }

    Ok(merged)
}
