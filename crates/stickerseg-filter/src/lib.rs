//! stickerseg-filter - Image filters for sticker segmentation
//!
//! This crate provides:
//!
//! - Convolution kernels (Laplacian)
//! - Luminance conversion of RGBA pixels
//! - Blur scoring (mean absolute Laplacian response of a rectangle)

pub mod blur;
mod error;
pub mod kernel;
pub mod luminance;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use blur::{blur_score, blur_score_of_image, kernel_energy};
pub use luminance::{LuminanceField, luminance};
