//! Render a `data:` URI.

use crate::DataUriArgs;
use anyhow::{Context, Result};
use epoxy_visualizer::{Visualizer, VisualizerConfig};
use tracing::trace;

/// Runs the data-uri command.
///
/// Reads one URI from the input file or stdin and prints the rendered JPEG
/// URI.
pub fn run(args: DataUriArgs, config: VisualizerConfig) -> Result<()> {
    trace!(input = ?args.input, style = %args.style.style, "data_uri::run");

    let uri = super::read_text(args.input.as_deref())?;
    let viz = Visualizer::new(config);
    let out = viz
        .render_data_uri(uri.trim(), &args.style.style, args.style.scheme.as_deref())
        .context("Failed to render data URI")?;
    super::write_text(args.output.as_deref(), &out)
}
