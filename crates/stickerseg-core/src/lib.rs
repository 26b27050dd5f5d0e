//! stickerseg core - Basic data structures for sticker segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the segmentation engine:
//!
//! - [`RgbaView`] / [`RgbaImage`] - RGBA8 pixel buffers (borrowed / owned)
//! - [`Box`] - Axis-aligned rectangle regions
//! - [`Mask`] - Per-region pixel membership over the full canvas
//!
//! # Example
//!
//! ```
//! use stickerseg_core::{Mask, RgbaImage};
//!
//! let mut img = RgbaImage::new(8, 8).unwrap();
//! img.set_rgba(3, 4, 255, 0, 0, 255).unwrap();
//!
//! let view = img.as_view();
//! assert_eq!(view.count_foreground(16), 1);
//!
//! let mut mask = Mask::new(8, 8).unwrap();
//! mask.set(3, 4).unwrap();
//! assert_eq!(mask.count(), 1);
//! ```

pub mod box_;
pub mod error;
pub mod mask;
pub mod rgba;

pub use box_::Box;
pub use error::{Error, Result};
pub use mask::{Mask, MaskIter};
pub use rgba::{RgbaImage, RgbaView};
