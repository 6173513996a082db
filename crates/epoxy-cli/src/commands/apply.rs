//! Render a single image file.

use crate::ApplyArgs;
use anyhow::{Result, bail};
use epoxy_visualizer::{Visualizer, VisualizerConfig};
use tracing::{info, trace};

/// Runs the apply command.
pub fn run(args: ApplyArgs, config: VisualizerConfig, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "apply::run");

    let quality = args.quality.unwrap_or(config.jpeg_quality);
    if !(1..=100).contains(&quality) {
        bail!("Quality must be 1-100, got {}", quality);
    }

    let viz = Visualizer::new(config);
    let image = super::load_image(&args.input)?;
    let resolution = super::resolve(&viz, &args.style, &args.overrides)?;
    let rendered = viz.render_resolved(&image, resolution);
    super::save_image(&args.output, &rendered.image, quality)?;

    info!(
        output = %args.output.display(),
        style = rendered.style,
        quality,
        "apply complete"
    );
    if verbose > 0 {
        println!(
            "{} -> {} ({}x{}, floor rows {}..{}, style '{}'{})",
            args.input.display(),
            args.output.display(),
            rendered.image.width(),
            rendered.image.height(),
            rendered.region.start_y,
            rendered.region.end_y,
            rendered.style,
            rendered
                .scheme
                .map(|s| format!(", scheme '{}'", s))
                .unwrap_or_default()
        );
    }
    Ok(())
}
