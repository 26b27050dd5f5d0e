//! Region set statistics

use crate::error::{RegionError, RegionResult};
use crate::region::Region;

/// Summary of the areas in a region set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStats {
    /// Number of regions
    pub count: usize,
    /// Sum of all areas
    pub total_area: u64,
    /// Mean area, rounded half up
    pub avg_area: u64,
    /// Largest area
    pub max_area: u32,
    /// Smallest area
    pub min_area: u32,
    /// Id of the first region with the largest area
    pub argmax: u32,
    /// Id of the first region with the smallest area
    pub argmin: u32,
}

/// Compute area statistics over `regions`.
///
/// Ties for the largest or smallest area resolve to the earliest region in
/// list order.
///
/// # Errors
///
/// Returns [`RegionError::EmptyRegionSet`] if `regions` is empty.
pub fn region_stats(regions: &[Region]) -> RegionResult<RegionStats> {
    let first = regions.first().ok_or(RegionError::EmptyRegionSet)?;

    let mut stats = RegionStats {
        count: regions.len(),
        total_area: 0,
        avg_area: 0,
        max_area: first.area,
        min_area: first.area,
        argmax: first.id,
        argmin: first.id,
    };

    for r in regions {
        stats.total_area += r.area as u64;
        if r.area > stats.max_area {
            stats.max_area = r.area;
            stats.argmax = r.id;
        }
        if r.area < stats.min_area {
            stats.min_area = r.area;
            stats.argmin = r.id;
        }
    }

    let n = stats.count as u64;
    stats.avg_area = (stats.total_area + n / 2) / n;
    Ok(stats)
}
