//! JPEG format support.
//!
//! Decoding goes through `jpeg-decoder`, encoding through `jpeg-encoder`.
//! JPEG has no alpha channel: decoded images are opaque and the encoder
//! drops alpha.
//!
//! Supported inputs are 8-bit RGB, grayscale, 16-bit grayscale (high byte
//! kept) and CMYK (approximate conversion).

use std::io::{BufReader, Cursor};

use epoxy_core::RgbaImage;
use tracing::trace;

use crate::{IoError, IoResult};

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// Options for writing JPEG files.
///
/// ```rust
/// use epoxy_io::jpeg::JpegWriterOptions;
///
/// let options = JpegWriterOptions { quality: 75 };
/// assert!(options.quality < JpegWriterOptions::default().quality);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Decodes JPEG bytes into an opaque RGBA8 image.
pub fn decode(bytes: &[u8]) -> IoResult<RgbaImage> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    let pixels = decoder.decode().map_err(|e| IoError::Decode(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    trace!(width, height, pixel_format = ?info.pixel_format, "jpeg::decode");

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| [l16[0], l16[0], l16[0], 255])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let [r, g, b] = cmyk_to_rgb([cmyk[0], cmyk[1], cmyk[2], cmyk[3]]);
                [r, g, b, 255]
            })
            .collect(),
    };

    Ok(RgbaImage::from_raw(width, height, rgba)?)
}

/// Approximate CMYK to RGB conversion.
fn cmyk_to_rgb(cmyk: [u8; 4]) -> [u8; 3] {
    let [c, m, y, k] = cmyk.map(|v| v as f32 / 255.0);
    [
        ((1.0 - c) * (1.0 - k) * 255.0) as u8,
        ((1.0 - m) * (1.0 - k) * 255.0) as u8,
        ((1.0 - y) * (1.0 - k) * 255.0) as u8,
    ]
}

/// Encodes an image as baseline JPEG, dropping alpha.
///
/// # Errors
///
/// [`IoError::Encode`] for a quality outside 1..=100, an empty image, or
/// a dimension above 65535.
pub fn encode(image: &RgbaImage, quality: u8) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    if !(1..=100).contains(&quality) {
        return Err(IoError::Encode(format!("quality {quality} outside 1..=100")));
    }
    let (width, height) = image.dimensions();
    let (w16, h16) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(IoError::Encode(format!("cannot encode {width}x{height} image as JPEG")));
        }
    };

    let rgb = image.to_rgb();
    let mut buffer = Vec::new();
    Encoder::new(&mut buffer, quality)
        .encode(&rgb, w16, h16, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::Encode(e.to_string()))?;

    trace!(width, height, quality, bytes = buffer.len(), "jpeg::encode");
    Ok(buffer)
}

/// Encodes with the given writer options.
pub fn encode_with_options(image: &RgbaImage, options: &JpegWriterOptions) -> IoResult<Vec<u8>> {
    encode(image, options.quality)
}
