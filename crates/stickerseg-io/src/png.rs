//! PNG image format support
//!
//! Every decoded PNG is expanded to RGBA8: palettes and low bit depths are
//! expanded by the decoder, 16-bit samples keep their high byte, gray is
//! replicated into R, G and B, and images without alpha become opaque.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use stickerseg_core::RgbaImage;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbaImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                other
            )));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * bytes_per_sample;

    let mut image = RgbaImage::new(width, height)?;
    for y in 0..height {
        let src = &data[y as usize * bytes_per_row..];
        let dst = image.row_mut(y);
        for x in 0..width as usize {
            // High byte of each sample
            let s = |i: usize| src[x * stride + i * bytes_per_sample];
            let (r, g, b, a) = match samples {
                1 => (s(0), s(0), s(0), 255),
                2 => (s(0), s(0), s(0), s(1)),
                3 => (s(0), s(1), s(2), 255),
                _ => (s(0), s(1), s(2), s(3)),
            };
            dst[x * 4..x * 4 + 4].copy_from_slice(&[r, g, b, a]);
        }
    }

    Ok(image)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(image: &RgbaImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

/// Encode an image into an in-memory PNG file
pub fn encode_png(image: &RgbaImage) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(image, &mut buffer)?;
    Ok(buffer)
}

/// Decode an in-memory PNG file
pub fn decode_png(data: &[u8]) -> IoResult<RgbaImage> {
    read_png(std::io::Cursor::new(data))
}
