//! epoxy - Epoxy floor visualizer CLI
//!
//! Renders floor photos in a chosen epoxy style from files, data URIs or
//! JSON requests.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable naming a config file when `--config` is absent.
const CONFIG_ENV: &str = "EPOXY_CONFIG";

#[derive(Parser)]
#[command(name = "epoxy")]
#[command(author, version, about = "Epoxy floor visualizer")]
#[command(long_about = "
Shows how a floor photo would look with an epoxy coating.
The bottom 40% of the frame is treated as floor and tinted
according to the chosen style and optional color scheme.

Examples:
  epoxy styles                                   # List styles and schemes
  epoxy apply room.jpg -o preview.jpg -s \"Metallic Epoksi\"
  epoxy apply room.png -o preview.png -s \"Parlak Yüzey\" --scheme \"Metalik Gümüş\"
  epoxy data-uri -i photo.txt -s \"Kuvars Kumlu Epoksi\"
  epoxy request -i request.json --pretty
  epoxy batch \"photos/*.jpg\" -o previews -s \"Terrazzo Görünümlü\"
  epoxy profile -s \"Endüstriyel Stil\" --scheme \"Altın Dokunuşlar\"
  epoxy info room.jpg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML config file (falls back to $EPOXY_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image file
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Render a data URI from a file or stdin
    #[command(name = "data-uri", visible_alias = "uri")]
    DataUri(DataUriArgs),

    /// Handle a JSON visualize request
    Request(RequestArgs),

    /// Render every file matching a glob pattern
    Batch(BatchArgs),

    /// List styles and color schemes
    #[command(visible_alias = "ls")]
    Styles(StylesArgs),

    /// Print the resolved profile for a style
    Profile(ProfileArgs),

    /// Display image information and floor region
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Style selection shared by render commands.
#[derive(Args, Clone)]
struct StyleArgs {
    /// Style name (empty or unknown = Düz Renk Epoksi)
    #[arg(short, long, default_value = "")]
    style: String,

    /// Color scheme name
    #[arg(long)]
    scheme: Option<String>,
}

/// Manual profile adjustments applied after lookup.
#[derive(Args, Clone, Default)]
struct ProfileOverrides {
    /// Override brightness
    #[arg(long)]
    brightness: Option<f32>,

    /// Override contrast
    #[arg(long)]
    contrast: Option<f32>,

    /// Override saturation
    #[arg(long)]
    saturation: Option<f32>,

    /// Override reflection strength (0-1)
    #[arg(long)]
    reflection: Option<f32>,
}

#[derive(Args)]
struct ApplyArgs {
    /// Input image
    input: PathBuf,

    /// Output image (.jpg or .png)
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    #[command(flatten)]
    overrides: ProfileOverrides,

    /// JPEG quality (1-100, default from config)
    #[arg(short, long)]
    quality: Option<u8>,
}

#[derive(Args)]
struct DataUriArgs {
    /// File holding the data URI (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args)]
struct RequestArgs {
    /// JSON request file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// Output format: jpg or png (default: jpg)
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Args)]
struct StylesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ProfileArgs {
    #[command(flatten)]
    style: StyleArgs,

    #[command(flatten)]
    overrides: ProfileOverrides,

    /// Output as JSON instead of YAML
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Installs the tracing subscriber.
///
/// The returned guard must live until exit so buffered file logs flush.
fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_ref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = commands::load_config(config_path.as_deref())?;

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, config, cli.verbose),
        Commands::DataUri(args) => commands::data_uri::run(args, config),
        Commands::Request(args) => commands::request::run(args, config),
        Commands::Batch(args) => commands::batch::run(args, config, cli.verbose),
        Commands::Styles(args) => commands::styles::run(args),
        Commands::Profile(args) => commands::profile::run(args, config),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
