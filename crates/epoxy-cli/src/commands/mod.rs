//! CLI command implementations

pub mod apply;
pub mod batch;
pub mod data_uri;
pub mod info;
pub mod profile;
pub mod request;
pub mod styles;

use anyhow::{Context, Result};
use epoxy_core::RgbaImage;
use epoxy_style::Resolution;
use epoxy_visualizer::{Visualizer, VisualizerConfig};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::{ProfileOverrides, StyleArgs};

/// Loads the config file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<VisualizerConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            VisualizerConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => Ok(VisualizerConfig::default()),
    }
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    epoxy_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbaImage, quality: u8) -> Result<()> {
    epoxy_io::write_with_quality(path, image, quality)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Reads a text input from a file, or stdin when `path` is `None`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Writes text to a file, or stdout when `path` is `None`.
pub fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write: {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Resolves the style arguments and applies any manual overrides.
pub fn resolve(viz: &Visualizer, style: &StyleArgs, overrides: &ProfileOverrides) -> Result<Resolution> {
    let mut resolution = viz.resolve(&style.style, style.scheme.as_deref());
    if resolution.fell_back && !style.style.trim().is_empty() {
        eprintln!(
            "Warning: unknown style '{}', using '{}'",
            style.style, resolution.style
        );
    }
    let scheme = style.scheme.as_deref().unwrap_or("");
    if !scheme.trim().is_empty() && resolution.scheme.is_none() {
        eprintln!("Warning: unknown color scheme '{}', ignored", scheme);
    }

    let mut profile = resolution.profile;
    if let Some(v) = overrides.brightness {
        profile = profile.with_brightness(v);
    }
    if let Some(v) = overrides.contrast {
        profile = profile.with_contrast(v);
    }
    if let Some(v) = overrides.saturation {
        profile = profile.with_saturation(v);
    }
    if let Some(v) = overrides.reflection {
        profile = profile.with_reflection(v);
    }
    profile.validate().context("Invalid profile override")?;
    resolution.profile = profile;
    Ok(resolution)
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
