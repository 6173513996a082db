//! The render pipeline.
//!
//! ```text
//! data URI -> bytes -> RgbaImage -> resolve style -> detect floor
//!          -> transform floor rows -> JPEG -> data URI
//! ```
//!
//! Every call is independent. A [`Visualizer`] only holds read-only
//! configuration and can be shared across threads.

use std::time::Instant;

use epoxy_core::{FloorRegion, RgbaImage};
use epoxy_io::jpeg::JpegWriterOptions;
use epoxy_io::{DataUri, Format};
use epoxy_style::{Resolution, StyleProfile};
use tracing::{debug, info};

use crate::{Result, VisualizeError, VisualizerConfig};

/// Output of a render before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Tinted image, same size as the input.
    pub image: RgbaImage,
    /// Profile that was applied.
    pub profile: StyleProfile,
    /// Rows that were treated as floor.
    pub region: FloorRegion,
    /// Catalog name of the style used.
    pub style: &'static str,
    /// Catalog name of the merged color scheme, if any.
    pub scheme: Option<&'static str>,
}

/// Floor preview renderer.
///
/// ```rust
/// use epoxy_core::RgbaImage;
/// use epoxy_visualizer::Visualizer;
///
/// let viz = Visualizer::default();
/// let photo = RgbaImage::filled(10, 10, [255, 255, 255, 255]);
/// let out = viz.render_image(&photo, "Düz Renk Epoksi", None);
/// assert_eq!(out.image, photo);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    config: VisualizerConfig,
}

impl Visualizer {
    /// Creates a visualizer with the given configuration.
    pub fn new(config: VisualizerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Resolves names. An empty or unknown style falls back to the default
    /// style like any other name outside the catalog.
    pub fn resolve(&self, style: &str, scheme: Option<&str>) -> Resolution {
        let scheme = scheme.filter(|s| !s.trim().is_empty());
        Resolution::of(style, scheme)
    }

    /// Renders a `data:` URI and returns a JPEG `data:` URI of the same size.
    ///
    /// # Errors
    ///
    /// - [`VisualizeError::ImageDecode`] for a malformed URI or undecodable image
    /// - [`VisualizeError::Encode`] if JPEG encoding fails
    pub fn render_data_uri(&self, uri: &str, style: &str, scheme: Option<&str>) -> Result<String> {
        let parsed = DataUri::parse(uri).map_err(VisualizeError::ImageDecode)?;
        let rendered = self.render_bytes(&parsed.data, parsed.mime_hint(), style, scheme)?;
        let jpeg = self.encode_jpeg(&rendered.image)?;
        Ok(DataUri::encode(Format::Jpeg.mime(), &jpeg))
    }

    /// Decodes `bytes` and renders them.
    pub fn render_bytes(
        &self,
        bytes: &[u8],
        mime_hint: Option<&str>,
        style: &str,
        scheme: Option<&str>,
    ) -> Result<Rendered> {
        let image = epoxy_io::decode(bytes, mime_hint).map_err(VisualizeError::ImageDecode)?;
        debug!(width = image.width(), height = image.height(), "decoded input");
        Ok(self.render_image(&image, style, scheme))
    }

    /// Renders an already decoded image. Never fails.
    pub fn render_image(&self, image: &RgbaImage, style: &str, scheme: Option<&str>) -> Rendered {
        self.render_resolved(image, self.resolve(style, scheme))
    }

    /// Renders with an explicit resolution, e.g. one whose profile was
    /// adjusted after lookup.
    pub fn render_resolved(&self, image: &RgbaImage, resolution: Resolution) -> Rendered {
        let start = Instant::now();
        let region = FloorRegion::detect(image.width(), image.height());

        let mut out = image.clone();
        if resolution.profile.is_identity() {
            debug!(style = resolution.style, "identity profile, skipping transform");
        } else {
            #[cfg(feature = "parallel")]
            epoxy_ops::parallel::apply_profile_in_place(&mut out, region, &resolution.profile);
            #[cfg(not(feature = "parallel"))]
            epoxy_ops::apply_profile_in_place(&mut out, region, &resolution.profile);
        }

        info!(
            style = resolution.style,
            scheme = resolution.scheme.unwrap_or("-"),
            fell_back = resolution.fell_back,
            width = image.width(),
            height = image.height(),
            floor_start = region.start_y,
            elapsed_us = start.elapsed().as_micros() as u64,
            "rendered floor preview"
        );

        Rendered {
            image: out,
            profile: resolution.profile,
            region,
            style: resolution.style,
            scheme: resolution.scheme,
        }
    }

    /// Encodes at the configured JPEG quality.
    pub fn encode_jpeg(&self, image: &RgbaImage) -> Result<Vec<u8>> {
        let options = JpegWriterOptions {
            quality: self.config.jpeg_quality,
        };
        epoxy_io::jpeg::encode_with_options(image, &options).map_err(VisualizeError::Encode)
    }
}
