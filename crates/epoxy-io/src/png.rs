//! PNG format support.
//!
//! Decodes every PNG color type into RGBA8. Palette and low bit-depth
//! images are expanded by the decoder, 16-bit samples keep their high
//! byte. Encoding always writes 8-bit RGBA with an sRGB chunk.
//!
//! # Example
//!
//! ```rust
//! use epoxy_core::RgbaImage;
//! use epoxy_io::png;
//!
//! let image = RgbaImage::filled(4, 3, [10, 20, 30, 128]);
//! let bytes = png::encode(&image).unwrap();
//! assert_eq!(png::decode(&bytes).unwrap(), image);
//! ```

use std::io::Cursor;

use epoxy_core::RgbaImage;
use tracing::trace;

use crate::{IoError, IoResult};

/// Decodes PNG bytes into an RGBA8 image.
pub fn decode(bytes: &[u8]) -> IoResult<RgbaImage> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let samples = &buf[..info.buffer_size()];
    trace!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        depth = ?info.bit_depth,
        "png::decode"
    );

    let sixteen = match info.bit_depth {
        png::BitDepth::Eight => false,
        png::BitDepth::Sixteen => true,
        other => {
            return Err(IoError::Decode(format!("unexpected bit depth after expansion: {other:?}")));
        }
    };
    let step = if sixteen { 2 } else { 1 };
    // High byte of big-endian 16-bit samples, or the sample itself.
    let narrowed: Vec<u8> = samples.iter().step_by(step).copied().collect();

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => narrowed,
        png::ColorType::Rgb => narrowed
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        png::ColorType::Grayscale => narrowed.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => narrowed
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(IoError::Decode("indexed PNG was not expanded".into()));
        }
    };

    Ok(RgbaImage::from_raw(info.width, info.height, rgba)?)
}

/// Encodes an RGBA8 image as PNG.
pub fn encode(image: &RgbaImage) -> IoResult<Vec<u8>> {
    if image.is_empty() {
        return Err(IoError::Encode(format!(
            "cannot encode {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| IoError::Encode(e.to_string()))?;
        writer.finish().map_err(|e| IoError::Encode(e.to_string()))?;
    }

    trace!(width = image.width(), height = image.height(), bytes = out.len(), "png::encode");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    #[test]
    fn test_roundtrip_rgba() {
        let mut image = RgbaImage::filled(5, 4, [1, 2, 3, 4]);
        image.put_pixel(4, 3, [250, 128, 0, 255]).unwrap();
        let decoded = decode(&encode(&image).unwrap()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_decode_rgb_adds_opaque_alpha() {
        let bytes = encode_raw(2, 1, png::ColorType::Rgb, png::BitDepth::Eight, &[10, 20, 30, 40, 50, 60]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.as_raw(), &[10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let bytes = encode_raw(2, 1, png::ColorType::GrayscaleAlpha, png::BitDepth::Eight, &[7, 100, 9, 0]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.as_raw(), &[7, 7, 7, 100, 9, 9, 9, 0]);
    }

    #[test]
    fn test_decode_sixteen_bit_takes_high_byte() {
        let bytes = encode_raw(1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &[0x12, 0x34, 0xAB, 0xCD, 0xFF, 0x00]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), Some([0x12, 0xAB, 0xFF, 255]));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode(b"not a png"), Err(IoError::Decode(_))));
    }

    #[test]
    fn test_encode_empty_fails() {
        let image = RgbaImage::filled(3, 0, [0; 4]);
        assert!(matches!(encode(&image), Err(IoError::Encode(_))));
    }
}
