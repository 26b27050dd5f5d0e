//! stickerseg-region - Sticker region processing
//!
//! This crate provides the segmentation engine proper:
//!
//! - **Labeling** - Splitting alpha-thresholded foreground into connected regions
//! - **Selection** - Dropping regions that are too small or too blurry
//! - **Merging** - Absorbing small fragments into adjacent larger regions
//! - **Extraction** - Cutting a region out as a standalone RGBA sticker
//! - **Statistics** - Count and area summaries over a region set
//! - **Pipeline** - All of the above in one call with [`segment`]
//!
//! # Examples
//!
//! ## Segmenting an image
//!
//! ```
//! use stickerseg_core::RgbaImage;
//! use stickerseg_region::{SegmentationOptions, extract_region, segment};
//!
//! // A 20x20 checkerboard sticker on a transparent canvas
//! let mut img = RgbaImage::new(40, 40).unwrap();
//! for y in 5..25 {
//!     for x in 5..25 {
//!         let v = if (x + y) % 2 == 0 { 255 } else { 0 };
//!         img.set_rgba(x, y, v, v, v, 255).unwrap();
//!     }
//! }
//!
//! let options = SegmentationOptions::default();
//! let regions = segment(&img.as_view(), &options).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].area, 400);
//!
//! let sticker = extract_region(&regions[0], &img.as_view()).unwrap();
//! assert_eq!((sticker.width(), sticker.height()), (20, 20));
//! ```
//!
//! ## Statistics
//!
//! ```
//! use stickerseg_core::RgbaImage;
//! use stickerseg_region::{ConnectivityType, label_regions, region_stats};
//!
//! let mut img = RgbaImage::new(10, 10).unwrap();
//! img.set_rgba(0, 0, 0, 0, 0, 255).unwrap();
//! img.set_rgba(5, 5, 0, 0, 0, 255).unwrap();
//! img.set_rgba(6, 5, 0, 0, 0, 255).unwrap();
//!
//! let regions = label_regions(&img.as_view(), 16, ConnectivityType::EightWay).unwrap();
//! let stats = region_stats(&regions).unwrap();
//! assert_eq!(stats.count, 2);
//! assert_eq!(stats.max_area, 2);
//! assert_eq!(stats.argmax, 2);
//! ```

pub mod conncomp;
pub mod error;
pub mod extract;
pub mod label;
pub mod merge;
pub mod region;
pub mod segment;
pub mod select;
pub mod stats;

// Re-export core types
pub use stickerseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::ConnectivityType;
pub use extract::{extract_region, extract_region_padded};
pub use label::{count_regions, label_regions};
pub use merge::{merge_small_regions, regions_adjacent};
pub use region::{Region, sort_by_area};
pub use segment::{SegmentationOptions, score_regions, segment, segment_rgba};
pub use select::{select_by_area, select_by_sharpness, select_regions};
pub use stats::{RegionStats, region_stats};
