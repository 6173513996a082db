//! WebP decoding via the `image` crate.
//!
//! Browsers happily hand out `image/webp` data URIs, so the visualizer can
//! accept them when this feature is enabled. Output is always JPEG, so
//! there is no WebP encoder.

use image::ImageFormat;
use tracing::trace;

use epoxy_core::RgbaImage;

use crate::{IoError, IoResult};

/// Decodes WebP bytes into an RGBA8 image.
pub fn decode(bytes: &[u8]) -> IoResult<RgbaImage> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::WebP)
        .map_err(|e| IoError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    trace!(width, height, "webp::decode");
    Ok(RgbaImage::from_raw(width, height, rgba.into_raw())?)
}
