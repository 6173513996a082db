//! Handle a JSON visualize request.

use crate::RequestArgs;
use anyhow::{Context, Result};
use epoxy_visualizer::{VisualizeRequest, Visualizer, VisualizerConfig};
use tracing::trace;

/// Runs the request command.
pub fn run(args: RequestArgs, config: VisualizerConfig) -> Result<()> {
    trace!(input = ?args.input, "request::run");

    let json = super::read_text(args.input.as_deref())?;
    let request = VisualizeRequest::from_json(&json).context("Invalid request JSON")?;
    let response = Visualizer::new(config)
        .handle(&request)
        .context("Visualize request failed")?;
    println!("{}", response.to_json(args.pretty)?);
    Ok(())
}
