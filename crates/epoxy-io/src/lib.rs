//! # epoxy-io
//!
//! Image I/O for the epoxy visualizer.
//!
//! Photos reach the visualizer as base64 `data:` URIs from a browser, as raw
//! bytes, or as files on disk. This crate turns all of them into an
//! [`RgbaImage`] and back:
//!
//! - [`DataUri`] - Parse and format `data:<mime>;base64,...` strings
//! - [`Format`] - Magic-byte, MIME and extension detection
//! - [`decode`] - Bytes to RGBA8 with format auto-detection
//! - [`read`] / [`write`] - File helpers, format from content or extension
//!
//! # Quick Start
//!
//! ```rust
//! use epoxy_core::RgbaImage;
//! use epoxy_io::{decode, jpeg, DataUri, Format};
//!
//! let photo = RgbaImage::filled(16, 16, [90, 110, 130, 255]);
//! let uri = DataUri::encode(Format::Jpeg.mime(), &jpeg::encode(&photo, 90).unwrap());
//!
//! let parsed = DataUri::parse(&uri).unwrap();
//! let image = decode(&parsed.data, parsed.mime_hint()).unwrap();
//! assert_eq!(image.dimensions(), (16, 16));
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Notes |
//! |--------|------|-------|-------|
//! | PNG | Yes | Yes | 8/16-bit, palette, gray; written as RGBA8 |
//! | JPEG | Yes | Yes | RGB, gray, CMYK; alpha dropped on write |
//! | WebP | `webp` feature | No | via the `image` crate |
//!
//! # Feature Flags
//!
//! - `webp` - WebP decoding (off by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use epoxy_core::RgbaImage;
use tracing::debug;

mod datauri;
mod detect;
mod error;
pub mod jpeg;
pub mod png;

#[cfg(feature = "webp")]
pub mod webp;

pub use datauri::DataUri;
pub use detect::Format;
pub use error::{IoError, IoResult};

/// Decodes image bytes, detecting the format from magic bytes first and
/// `mime_hint` second.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if neither source names a known format
/// - [`IoError::Decode`] if the codec rejects the data
pub fn decode(bytes: &[u8], mime_hint: Option<&str>) -> IoResult<RgbaImage> {
    let format = Format::detect(bytes, mime_hint);
    debug!(%format, bytes = bytes.len(), hint = mime_hint.unwrap_or(""), "decode");
    decode_as(bytes, format)
}

/// Decodes image bytes as a specific format.
pub fn decode_as(bytes: &[u8], format: Format) -> IoResult<RgbaImage> {
    match format {
        Format::Png => png::decode(bytes),
        Format::Jpeg => jpeg::decode(bytes),
        #[cfg(feature = "webp")]
        Format::WebP => webp::decode(bytes),
        #[cfg(not(feature = "webp"))]
        Format::WebP => Err(IoError::UnsupportedFormat(
            "WebP (build with the `webp` feature)".into(),
        )),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            "unrecognized image data".into(),
        )),
    }
}

/// Encodes an image in `format`. `quality` applies to JPEG only.
pub fn encode(image: &RgbaImage, format: Format, quality: u8) -> IoResult<Vec<u8>> {
    match format {
        Format::Png => png::encode(image),
        Format::Jpeg => jpeg::encode(image, quality),
        other => Err(IoError::UnsupportedFormat(format!("cannot encode {other}"))),
    }
}

/// Reads an image file.
///
/// The format is detected from content, falling back to the extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let format = match Format::from_bytes(&bytes) {
        Format::Unknown => Format::from_extension(path),
        format => format,
    };
    debug!(path = %path.display(), %format, "read");
    decode_as(&bytes, format)
}

/// Writes an image file, choosing the format from the extension.
///
/// JPEG files use [`jpeg::JpegWriterOptions::default`].
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    write_with_quality(path, image, jpeg::JpegWriterOptions::default().quality)
}

/// Like [`write`] with an explicit JPEG quality.
pub fn write_with_quality<P: AsRef<Path>>(path: P, image: &RgbaImage, quality: u8) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    let bytes = match format {
        Format::Png | Format::Jpeg => encode(image, format, quality)?,
        _ => {
            return Err(IoError::UnsupportedFormat(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            ));
        }
    };
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), %format, "write");
    Ok(())
}
