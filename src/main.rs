//! diskring - draw disk usage as a sunburst.
//!
//! Usage:
//!   diskring                     Show ~/Downloads in the terminal
//!   diskring -p DIR              Show DIR in the terminal
//!   diskring -p DIR -o out.ps    Write an EPS file
//!   diskring -p DIR -o out.svg   Write an SVG file
//!   diskring --help              Show help

mod settings;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result, eyre};
use tracing_subscriber::EnvFilter;

use diskring_core::{DirNode, Rgb, ScanConfig, VisualConfig};
use diskring_export::file_sink;
use diskring_layout::render;
use diskring_scan::Aggregator;
use diskring_tui::CanvasSink;

use settings::Overrides;

#[derive(Parser)]
#[command(
    name = "diskring",
    version,
    about = "Draw disk usage as concentric rings",
    long_about = "diskring sums the size of every directory under a root and draws \
                  the result as a sunburst: each ring is one level deeper, and each \
                  arc spans the share of its parent that its size represents.\n\n\
                  Without --out-file the drawing is shown in the terminal."
)]
struct Cli {
    /// Directory to visualize (defaults to your downloads directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Write to this file instead of the terminal (.svg for SVG, PostScript otherwise)
    #[arg(short, long = "out-file")]
    out_file: Option<PathBuf>,

    /// Ring thickness factor [default: 10]
    #[arg(short, long)]
    scale: Option<f64>,

    /// Outline width [default: 1]
    #[arg(short, long = "line-width")]
    line_width: Option<f64>,

    /// Arc smoothness [default: 10]
    #[arg(short, long)]
    quality: Option<u32>,

    /// Background color as three components in 0.0-1.0 [default: 1 1 1]
    #[arg(short = 'b', long = "colour-back", num_args = 3, value_names = ["R", "G", "B"])]
    colour_back: Option<Vec<f64>>,

    /// Outline color as three components in 0.0-1.0 [default: 0 0 0]
    #[arg(short = 'f', long = "colour-line", num_args = 3, value_names = ["R", "G", "B"])]
    colour_line: Option<Vec<f64>>,

    /// Drawing width (0 = fit the tree)
    #[arg(short = 'x', long)]
    width: Option<u32>,

    /// Drawing height (0 = same as width)
    #[arg(short = 'y', long)]
    height: Option<u32>,

    /// Visual settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave out entries whose name starts with a dot
    #[arg(long)]
    skip_hidden: bool,

    /// Leave out entries matching this glob (repeatable)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Count symlinked files at their target's size
    #[arg(long)]
    follow_symlinks: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            unit_scale: self.scale.map(|s| s * 2.0),
            line_width: self.line_width,
            quality: self.quality,
            background_color: self.colour_back.as_deref().and_then(to_rgb),
            line_color: self.colour_line.as_deref().and_then(to_rgb),
            window_width: self.width,
            window_height: self.height,
            out_file: self.out_file.clone(),
        }
    }

    fn root(&self) -> Result<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => default_root()
                .ok_or_else(|| eyre!("Cannot determine a default directory; pass --path"))?,
        };
        path.canonicalize()
            .wrap_err_with(|| format!("Invalid path: {}", path.display()))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = settings::resolve(cli.config.as_deref(), &cli.overrides())
        .wrap_err("Invalid visual settings")?;
    let root = cli.root()?;

    println!("Starting at: {}", root.display());

    let scan_config = ScanConfig::builder()
        .root(root.clone())
        .include_hidden(!cli.skip_hidden)
        .follow_symlinks(cli.follow_symlinks)
        .ignore_patterns(cli.ignore.clone())
        .build()?;
    let tree = Aggregator::new(scan_config)?
        .aggregate()
        .wrap_err("Failed to read directory")?;

    println!("Directory size: {}", format_size(tree.total_size()));
    if tree.has_warnings() {
        eprintln!(
            "{} entries could not be read and were counted as empty",
            tree.warnings.len()
        );
    }
    tracing::info!(
        files = tree.stats.total_files,
        dirs = tree.stats.total_dirs,
        depth = tree.stats.max_depth,
        elapsed_ms = tree.scan_duration.as_millis() as u64,
        "aggregation complete"
    );

    draw(&tree.root, &root, &config)?;

    println!("Drawing complete");
    Ok(())
}

/// Send the layout to the configured output.
fn draw(root: &DirNode, root_path: &Path, config: &VisualConfig) -> Result<()> {
    match config.output.file() {
        Some(path) => {
            let mut sink = file_sink(path, config, root.depth())?;
            render(root, config, sink.as_mut())?;
        }
        None => {
            let mut sink =
                CanvasSink::new(config, root_path.display().to_string(), root.total_size());
            render(root, config, &mut sink)?;
        }
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_root() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

fn to_rgb(components: &[f64]) -> Option<Rgb> {
    match components {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}

/// Format bytes in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
