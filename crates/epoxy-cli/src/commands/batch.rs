//! Batch processing command

use crate::BatchArgs;
use anyhow::{Result, bail};
use epoxy_io::Format;
use epoxy_visualizer::{Visualizer, VisualizerConfig};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Runs the batch command.
///
/// Files are rendered in parallel; one failure does not stop the rest.
pub fn run(args: BatchArgs, config: VisualizerConfig, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, style = %args.style.style, "batch::run");

    let format = match args.format.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("jpg") | Some("jpeg") => Format::Jpeg,
        Some("png") => Format::Png,
        Some(other) => bail!("Unsupported output format: {}", other),
    };

    // Find matching files
    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    let jobs = plan_outputs(&files, &args.output_dir, format)?;
    std::fs::create_dir_all(&args.output_dir)?;

    let quality = config.jpeg_quality;
    let viz = Visualizer::new(config);
    let resolution = super::resolve(&viz, &args.style, &Default::default())?;

    let results: Vec<Result<()>> = jobs
        .par_iter()
        .map(|(input, output)| {
            let image = super::load_image(input)?;
            let rendered = viz.render_resolved(&image, resolution);
            super::save_image(output, &rendered.image, quality)?;
            debug!(input = %input.display(), output = %output.display(), "rendered");
            if verbose > 0 {
                println!("{} -> {}", input.display(), output.display());
            }
            Ok(())
        })
        .collect();

    // Report results
    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }
    Ok(())
}

/// Pairs every input with its output path.
///
/// Fails if two inputs would write the same file, e.g. `salon.png` and
/// `salon.jpg`, since the parallel writes would race.
fn plan_outputs(files: &[PathBuf], dir: &Path, format: Format) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut jobs = Vec::with_capacity(files.len());
    for input in files {
        let output = output_path(input, dir, format);
        if let Some(first) = seen.insert(output.clone(), input) {
            bail!(
                "{} and {} both map to {}",
                first.display(),
                input.display(),
                output.display()
            );
        }
        jobs.push((input.clone(), output));
    }
    Ok(jobs)
}

/// `<dir>/<stem>.<ext>` for the chosen output format.
fn output_path(input: &Path, dir: &Path, format: Format) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dir.join(format!("{}.{}", stem, format.extension()))
}
