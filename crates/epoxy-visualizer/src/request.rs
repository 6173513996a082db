//! JSON request and response bodies.
//!
//! These mirror what a browser posts to a visualize endpoint:
//!
//! ```json
//! { "image": "data:image/jpeg;base64,...", "style": "Metallic Epoksi", "colorScheme": "Metalik Gümüş" }
//! ```

use epoxy_style::StyleProfile;
use serde::{Deserialize, Serialize};

use crate::{Result, Visualizer};

/// A visualize call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizeRequest {
    /// Input photo as a `data:` URI.
    pub image: String,
    /// Style name; empty or unknown falls back to the default style.
    #[serde(default)]
    pub style: String,
    /// Optional color-scheme name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
}

impl VisualizeRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a visualize call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizeResponse {
    /// Rendered photo as a JPEG `data:` URI.
    pub image: String,
    /// Catalog name of the style that was applied.
    pub style: String,
    /// Catalog name of the scheme that was merged, if any.
    pub color_scheme: Option<String>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Profile that was applied.
    pub profile: StyleProfile,
}

impl VisualizeResponse {
    /// Serializes to JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}

impl Visualizer {
    /// Runs a full request.
    ///
    /// Same semantics as [`Visualizer::render_data_uri`], plus the resolved
    /// names and output size.
    pub fn handle(&self, request: &VisualizeRequest) -> Result<VisualizeResponse> {
        let parsed =
            epoxy_io::DataUri::parse(&request.image).map_err(crate::VisualizeError::ImageDecode)?;
        let rendered = self.render_bytes(
            &parsed.data,
            parsed.mime_hint(),
            &request.style,
            request.color_scheme.as_deref(),
        )?;
        let jpeg = self.encode_jpeg(&rendered.image)?;

        Ok(VisualizeResponse {
            image: epoxy_io::DataUri::encode(epoxy_io::Format::Jpeg.mime(), &jpeg),
            style: rendered.style.to_string(),
            color_scheme: rendered.scheme.map(str::to_string),
            width: rendered.image.width(),
            height: rendered.image.height(),
            profile: rendered.profile,
        })
    }
}
