//! Print a resolved style profile.

use crate::ProfileArgs;
use anyhow::Result;
use epoxy_style::StyleProfile;
use epoxy_visualizer::{Visualizer, VisualizerConfig};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileReport<'a> {
    style: &'a str,
    color_scheme: Option<&'a str>,
    fell_back: bool,
    profile: StyleProfile,
}

/// Runs the profile command. YAML by default, JSON with `--json`.
pub fn run(args: ProfileArgs, config: VisualizerConfig) -> Result<()> {
    let viz = Visualizer::new(config);
    let resolution = super::resolve(&viz, &args.style, &args.overrides)?;
    let report = ProfileReport {
        style: resolution.style,
        color_scheme: resolution.scheme,
        fell_back: resolution.fell_back,
        profile: resolution.profile,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", serde_yaml::to_string(&report)?);
    }
    Ok(())
}
