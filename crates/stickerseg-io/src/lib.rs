//! stickerseg-io - Image I/O for sticker segmentation
//!
//! Loads the alpha-channel source images produced by background removal and
//! writes extracted stickers. Every image is handled as RGBA8.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | Yes  | Yes   | `png-format` |

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "png-format")]
pub use png::{decode_png, encode_png, read_png, write_png};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use stickerseg_core::RgbaImage;

/// Read an image from a file, detecting the format from its header
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    match detect_format(path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::open(path)?;
            read_png(BufReader::new(file))
        }
        other => Err(IoError::UnsupportedFormat(format!("{:?}", other))),
    }
}

/// Write an image to a file in the given format
pub fn write_image<P: AsRef<Path>>(
    image: &RgbaImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::create(path)?;
            write_png(image, BufWriter::new(file))
        }
        other => Err(IoError::UnsupportedFormat(format!("{:?}", other))),
    }
}
