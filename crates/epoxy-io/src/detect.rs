//! Format detection utilities.
//!
//! Detects image formats from magic bytes, MIME types and file extensions.

use std::path::Path;

/// Image formats the visualizer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// WebP format (decoded only with the `webp` feature).
    WebP,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Format::Png;
        }

        // JPEG: 0xFF 0xD8 0xFF
        if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
            return Format::Jpeg;
        }

        // WebP: RIFF....WEBP
        if bytes.len() >= 12 && bytes[0..4] == *b"RIFF" && bytes[8..12] == *b"WEBP" {
            return Format::WebP;
        }

        Format::Unknown
    }

    /// Detects format from a MIME type such as `image/png`.
    ///
    /// Parameters after `;` are ignored and matching is case-insensitive.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Format::Png,
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Format::Jpeg,
            "image/webp" => Format::WebP,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") | Some("jpe") => Format::Jpeg,
            Some("webp") => Format::WebP,
            _ => Format::Unknown,
        }
    }

    /// Magic bytes first, then the declared MIME type.
    pub fn detect(bytes: &[u8], mime_hint: Option<&str>) -> Self {
        match Self::from_bytes(bytes) {
            Format::Unknown => mime_hint.map(Self::from_mime).unwrap_or(Format::Unknown),
            format => format,
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime(&self) -> &'static str {
        match self {
            Format::Png => "image/png",
            Format::Jpeg => "image/jpeg",
            Format::WebP => "image/webp",
            Format::Unknown => "application/octet-stream",
        }
    }

    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpg",
            Format::WebP => "webp",
            Format::Unknown => "",
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Png => "PNG",
            Format::Jpeg => "JPEG",
            Format::WebP => "WebP",
            Format::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_bytes() {
        assert_eq!(
            Format::from_bytes(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            Format::Png
        );
        assert_eq!(Format::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Format::Jpeg);
        assert_eq!(Format::from_bytes(b"RIFF\0\0\0\0WEBPVP8 "), Format::WebP);
        assert_eq!(Format::from_bytes(b"GIF89a"), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_mime() {
        assert_eq!(Format::from_mime("image/PNG"), Format::Png);
        assert_eq!(Format::from_mime("image/jpeg; charset=binary"), Format::Jpeg);
        assert_eq!(Format::from_mime("image/jpg"), Format::Jpeg);
        assert_eq!(Format::from_mime("text/plain"), Format::Unknown);
    }

    #[test]
    fn test_extension() {
        assert_eq!(Format::from_extension("floor.JPG"), Format::Jpeg);
        assert_eq!(Format::from_extension("a/b/c.png"), Format::Png);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_detect_prefers_magic() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xDB];
        assert_eq!(Format::detect(&jpeg, Some("image/png")), Format::Jpeg);
        assert_eq!(Format::detect(b"????", Some("image/png")), Format::Png);
        assert_eq!(Format::detect(b"????", None), Format::Unknown);
    }
}
