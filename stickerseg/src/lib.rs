//! stickerseg - Sticker segmentation for images with an alpha channel
//!
//! Given an RGBA image, splits its foreground (pixels above an alpha
//! threshold) into disjoint connected regions, scores each region's
//! sharpness, drops noise and blur, optionally merges small fragments into
//! larger neighbors, and cuts each surviving region out as its own sticker.
//!
//! # Overview
//!
//! - Core buffers: [`RgbaView`], [`RgbaImage`], [`Mask`], [`Box`]
//! - Sharpness scoring: [`filter`]
//! - Labeling, selection, merging, extraction and statistics: [`region`]
//! - PNG decode/encode: [`io`]
//!
//! # Example
//!
//! ```
//! use stickerseg::RgbaImage;
//! use stickerseg::region::{SegmentationOptions, extract_region_padded, segment};
//!
//! let mut img = RgbaImage::new(64, 64).unwrap();
//! for y in 10..40 {
//!     for x in 10..40 {
//!         let v = if (x + y) % 2 == 0 { 255 } else { 0 };
//!         img.set_rgba(x, y, v, v, v, 255).unwrap();
//!     }
//! }
//!
//! let regions = segment(&img.as_view(), &SegmentationOptions::default()).unwrap();
//! assert_eq!(regions.len(), 1);
//!
//! let sticker = extract_region_padded(&regions[0], &img.as_view(), 8).unwrap();
//! assert_eq!(sticker.width(), 30 + 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use stickerseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use stickerseg_filter as filter;
pub use stickerseg_io as io;
pub use stickerseg_region as region;
