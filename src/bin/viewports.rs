use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "viewports", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print viewports, unified extents and overlapping pairs.
    Inspect(InspectArgs),
    /// Resolve a scale against a source image and print the cut rectangles.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Layout description JSON.
    #[arg(long)]
    layout: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Layout description JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Scale mode: auto, max, reference, or pixels per physical unit.
    /// Defaults to the layout's own `scale`, then `auto`.
    #[arg(long)]
    scale: Option<String>,

    /// Source image; only its header is read, for the dimensions.
    #[arg(long, conflicts_with = "image_size")]
    image: Option<PathBuf>,

    /// Source image size as <width>x<height>, instead of --image.
    #[arg(long)]
    image_size: Option<String>,
}

#[derive(serde::Serialize)]
struct ViewportReport<'a> {
    name: &'a str,
    physical: &'a viewports::PhysicalRectangle,
    screen: String,
    resolution: Option<f64>,
    dpi: Option<f64>,
}

#[derive(serde::Serialize)]
struct OverlapReport<'a> {
    first: &'a str,
    second: &'a str,
    area: String,
}

#[derive(serde::Serialize)]
struct InspectReport<'a> {
    viewports: Vec<ViewportReport<'a>>,
    physical_extent: Option<viewports::PhysicalRectangle>,
    screen_extent: Option<String>,
    overlaps: Vec<OverlapReport<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_layout_config(path: &Path) -> anyhow::Result<viewports::LayoutConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open layout '{}'", path.display()))?;
    let cfg = viewports::LayoutConfig::from_json_str(&text)
        .with_context(|| format!("parse layout '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let layout = read_layout_config(&args.layout)?.build()?;

    let viewports = layout
        .viewports()
        .iter()
        .map(|v| ViewportReport {
            name: v.name(),
            physical: v.physical(),
            screen: v.screen().to_string(),
            resolution: v.resolution().ok(),
            dpi: v.dpi().ok(),
        })
        .collect();

    let overlaps = layout.pairwise_overlaps();
    let mut overlap_reports = Vec::with_capacity(overlaps.len());
    for o in &overlaps {
        let first = layout.get(o.first).context("overlap names a foreign viewport (bug)")?;
        let second = layout.get(o.second).context("overlap names a foreign viewport (bug)")?;
        overlap_reports.push(OverlapReport {
            first: first.name(),
            second: second.name(),
            area: o.area.to_string(),
        });
    }

    let report = InspectReport {
        viewports,
        physical_extent: layout.physical_size().ok(),
        screen_extent: layout.screen_size().ok().map(|r| r.to_string()),
        overlaps: overlap_reports,
    };
    print_json(&report)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = read_layout_config(&args.layout)?;
    let mut layout = cfg.build()?;

    let mode = match &args.scale {
        Some(s) => s.parse::<viewports::ScaleMode>()?,
        None => cfg.scale_mode()?.unwrap_or(viewports::ScaleMode::Auto),
    };

    if let Some(path) = &args.image {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("read image header '{}'", path.display()))?;
        layout.attach_source(&viewports::ImageSize::new(width, height));
    } else if let Some(size) = &args.image_size {
        layout.attach_source(&viewports::ImageSize::parse(size)?);
    }

    let plan = layout
        .plan(mode)
        .with_context(|| format!("resolve scale mode '{mode}'"))?;
    print_json(&plan)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write json")?;
    writeln!(out).context("write json")?;
    Ok(())
}
