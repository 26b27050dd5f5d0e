//! Sticker segmentation pipeline
//!
//! Runs the full chain over one RGBA image:
//!
//! 1. **Label**: connected foreground regions
//! 2. **Score**: blur score of every region's bbox
//! 3. **Filter**: drop small or blurry regions
//! 4. **Merge** (optional): absorb small fragments into adjacent larger
//!    regions, rescore, and drop regions that became too blurry
//! 5. **Sort**: largest area first

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use crate::label::label_regions;
use crate::merge::merge_small_regions;
use crate::region::{Region, sort_by_area};
use crate::select::{select_by_sharpness, select_regions};
use log::{debug, trace};
use stickerseg_core::RgbaView;
use stickerseg_filter::blur_score;

// =============================================================================
// Options
// =============================================================================

/// Options for sticker segmentation
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationOptions {
    /// Pixels with alpha strictly above this are foreground
    pub alpha_threshold: u8,

    /// Minimum region area in pixels
    pub min_area: u32,

    /// Run the small-region merge pass
    pub merge_small_regions: bool,

    /// Neighborhood used for labeling and merge adjacency
    pub connectivity: ConnectivityType,

    /// Minimum blur score a region must reach
    ///
    /// Must be finite and non-negative.
    pub blur_threshold: f64,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: 16,
            min_area: 300,
            merge_small_regions: false,
            connectivity: ConnectivityType::EightWay,
            blur_threshold: 15.0,
        }
    }
}

impl SegmentationOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alpha threshold
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set the minimum region area
    pub fn with_min_area(mut self, min_area: u32) -> Self {
        self.min_area = min_area;
        self
    }

    /// Enable or disable the merge pass
    pub fn with_merge_small_regions(mut self, merge: bool) -> Self {
        self.merge_small_regions = merge;
        self
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the minimum blur score
    pub fn with_blur_threshold(mut self, threshold: f64) -> Self {
        self.blur_threshold = threshold;
        self
    }

    /// Check that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `blur_threshold` is NaN,
    /// infinite or negative.
    pub fn validate(&self) -> RegionResult<()> {
        if !self.blur_threshold.is_finite() || self.blur_threshold < 0.0 {
            return Err(RegionError::InvalidParameters(format!(
                "blur_threshold must be finite and >= 0, got {}",
                self.blur_threshold
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the blur score of every region in place.
pub fn score_regions(regions: &mut [Region], view: &RgbaView<'_>) -> RegionResult<()> {
    for r in regions.iter_mut() {
        let score = blur_score(view, &r.bbox)?;
        trace!("region {} area {} blur {:.3}", r.id, r.area, score);
        r.blur_score = Some(score);
    }
    Ok(())
}

/// Segment an RGBA image into candidate stickers.
///
/// Returns the surviving regions sorted by area descending, each with its
/// blur score set. An image without qualifying regions yields an empty
/// list.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the options are invalid.
///
/// # Examples
///
/// ```
/// use stickerseg_core::RgbaImage;
/// use stickerseg_region::{SegmentationOptions, segment};
///
/// let img = RgbaImage::new(32, 32).unwrap();
/// let regions = segment(&img.as_view(), &SegmentationOptions::default()).unwrap();
/// assert!(regions.is_empty());
/// ```
pub fn segment(view: &RgbaView<'_>, options: &SegmentationOptions) -> RegionResult<Vec<Region>> {
    options.validate()?;

    let mut regions = label_regions(view, options.alpha_threshold, options.connectivity)?;
    debug!(
        "labeled {} regions in {}x{} image",
        regions.len(),
        view.width(),
        view.height()
    );

    score_regions(&mut regions, view)?;
    let mut kept = select_regions(&regions, options.min_area, options.blur_threshold);
    debug!("{} regions passed area and blur filters", kept.len());

    if options.merge_small_regions {
        let mut merged = merge_small_regions(&kept, options.connectivity)?;
        debug!("merge pass left {} of {} regions", merged.len(), kept.len());
        score_regions(&mut merged, view)?;
        kept = select_by_sharpness(&merged, options.blur_threshold);
    }

    sort_by_area(&mut kept);
    debug!("segmentation kept {} regions", kept.len());
    Ok(kept)
}

/// Segment a raw RGBA8 buffer.
///
/// # Errors
///
/// Returns [`RegionError::Core`] if the dimensions are zero or the buffer
/// length is not `width * height * 4`.
pub fn segment_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    options: &SegmentationOptions,
) -> RegionResult<Vec<Region>> {
    let view = RgbaView::new(data, width, height)?;
    segment(&view, options)
}
