//! Image info command.
//!
//! Displays dimensions, detected format and the floor band that a render
//! would tint.

use crate::InfoArgs;
use anyhow::{Context, Result};
use epoxy_core::{FloorRegion, RgbaImage};
use epoxy_io::Format;
use serde_json::json;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
        let format = match Format::from_bytes(&bytes) {
            Format::Unknown => Format::from_extension(path),
            f => f,
        };
        let image = epoxy_io::decode_as(&bytes, format)
            .with_context(|| format!("Failed to load: {}", path.display()))?;
        let region = FloorRegion::detect(image.width(), image.height());

        if args.json {
            print_json(path, &image, bytes.len() as u64, format, region)?;
        } else {
            print_text(path, &image, bytes.len() as u64, format, region, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn print_text(
    path: &Path,
    image: &RgbaImage,
    file_size: u64,
    format: Format,
    region: FloorRegion,
    verbose: u8,
) {
    println!("{}", path.display());
    println!("  Format:     {}", format);
    println!("  Resolution: {}x{}", image.width(), image.height());
    println!("  Pixels:     {}", image.width() as u64 * image.height() as u64);
    println!("  File size:  {}", super::format_size(file_size));
    println!(
        "  Floor:      rows {}..{} ({} rows)",
        region.start_y,
        region.end_y,
        region.height()
    );
    if verbose > 0 {
        let translucent = image.as_raw().chunks_exact(4).filter(|px| px[3] < 255).count();
        println!("  Translucent pixels: {}", translucent);
    }
}

fn print_json(
    path: &Path,
    image: &RgbaImage,
    file_size: u64,
    format: Format,
    region: FloorRegion,
) -> Result<()> {
    let out = json!({
        "path": path.display().to_string(),
        "format": format.name(),
        "mime": format.mime(),
        "width": image.width(),
        "height": image.height(),
        "fileSize": file_size,
        "floor": { "startY": region.start_y, "endY": region.end_y },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
