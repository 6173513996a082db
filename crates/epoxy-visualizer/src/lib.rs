//! # epoxy-visualizer
//!
//! Shows a floor photo in a chosen epoxy finish.
//!
//! A render decodes the photo, resolves the style and optional color scheme,
//! tints the bottom 40% of the frame and re-encodes the result as JPEG:
//!
//! ```rust
//! use epoxy_core::RgbaImage;
//! use epoxy_io::{png, DataUri};
//! use epoxy_visualizer::Visualizer;
//!
//! let photo = RgbaImage::filled(20, 20, [120, 110, 100, 255]);
//! let uri = DataUri::encode("image/png", &png::encode(&photo).unwrap());
//!
//! let viz = Visualizer::default();
//! let preview = viz.render_data_uri(&uri, "Metallic Epoksi", Some("Metalik Gümüş")).unwrap();
//! assert!(preview.starts_with("data:image/jpeg;base64,"));
//! ```
//!
//! # Modules
//!
//! - [`config`] - [`VisualizerConfig`] loaded from YAML
//! - [`request`] - JSON [`VisualizeRequest`] / [`VisualizeResponse`]
//! - [`visualizer`] - The [`Visualizer`] pipeline
//!
//! # Feature Flags
//!
//! - `parallel` - Transform floor rows on the rayon pool
//! - `webp` - Accept WebP input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
mod error;
pub mod request;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use error::{Result, VisualizeError};
pub use request::{VisualizeRequest, VisualizeResponse};
pub use visualizer::{Rendered, Visualizer};
