//! A binary to render a karyotype, along with optional link and data tracks,
//! with a local Circos installation.
//!
//! ```shell
//! cargo run --release --bin=circos-render --features=binaries -- \
//!     karyotype.txt --histogram coverage.txt --links links.txt \
//!     --circos-path /opt/circos --format png --output genome
//! ```
//!
//! Data tracks are stacked inward from the outer edge of the plot in the order
//! they are given (heatmaps first, then histograms). Links are drawn inside
//! the innermost track.

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use circosconf::Karyotype;
use circosconf::config::DataFile;
use circosconf::config::Link;
use circosconf::config::Plot;
use circosconf::config::circos::Builder;
use circosconf::config::circos::DEFAULT_WIDTH;
use circosconf::config::plot::Heatmap;
use circosconf::config::plot::Histogram;
use circosconf::render::Format;
use circosconf::render::Renderer;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The outer radius of the outermost data track.
const OUTER_RADIUS: f64 = 0.95;

/// The thickness of every data track.
const TRACK_THICKNESS: f64 = 0.08;

/// The gap between adjacent data tracks.
const TRACK_GAP: f64 = 0.02;

/// Renders a karyotype and its data tracks with Circos.
#[derive(Parser)]
struct Args {
    /// The karyotype file (optionally gzipped).
    karyotype: PathBuf,

    /// A link file. May be given multiple times.
    #[arg(long = "links")]
    links: Vec<PathBuf>,

    /// A heatmap data file. May be given multiple times.
    #[arg(long = "heatmap")]
    heatmaps: Vec<PathBuf>,

    /// A histogram data file. May be given multiple times.
    #[arg(long = "histogram")]
    histograms: Vec<PathBuf>,

    /// The root of the Circos installation.
    #[arg(long)]
    circos_path: Option<PathBuf>,

    /// The image format (`png` or `svg`).
    #[arg(long, default_value = "svg")]
    format: Format,

    /// The width of the image (in pixels).
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// The directory the image is written to.
    #[arg(long, default_value = ".")]
    directory: PathBuf,

    /// The name of the image (without extension).
    #[arg(short, long, default_value = "circos")]
    output: String,

    /// Prints the configuration instead of running Circos.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Gets the inner and outer radii of the data track at `index`.
fn track_radii(index: usize) -> Result<(f64, f64)> {
    let r1 = OUTER_RADIUS - index as f64 * (TRACK_THICKNESS + TRACK_GAP);
    let r0 = r1 - TRACK_THICKNESS;

    if r0 < 0.0 {
        bail!(
            "too many data tracks: track {} would end below the center of the image",
            index + 1
        );
    }

    Ok((r0, r1))
}

/// Gets the radius links are drawn at when `tracks` data tracks are stacked.
fn inner_radius(tracks: usize) -> f64 {
    (OUTER_RADIUS - tracks as f64 * (TRACK_THICKNESS + TRACK_GAP)).max(0.0)
}

fn run(args: Args) -> Result<()> {
    let karyotype = Karyotype::from_path(&args.karyotype)
        .with_context(|| format!("reading karyotype `{}`", args.karyotype.display()))?;

    info!(
        chromosomes = karyotype.chromosomes().count(),
        bands = karyotype.bands().count(),
        "read karyotype"
    );

    let mut plots = Vec::<Plot>::new();

    for path in &args.heatmaps {
        let file = DataFile::open(path)
            .with_context(|| format!("opening heatmap `{}`", path.display()))?;
        let (r0, r1) = track_radii(plots.len())
            .with_context(|| format!("placing heatmap `{}`", path.display()))?;
        plots.push(Heatmap::new(file, r0, r1).into());
    }

    for path in &args.histograms {
        let file = DataFile::open(path)
            .with_context(|| format!("opening histogram `{}`", path.display()))?;
        let (r0, r1) = track_radii(plots.len())
            .with_context(|| format!("placing histogram `{}`", path.display()))?;
        plots.push(Histogram::new(file, r0, r1).into());
    }

    let link_radius = inner_radius(plots.len());
    let mut links = Vec::new();

    for path in &args.links {
        let file =
            DataFile::open(path).with_context(|| format!("opening links `{}`", path.display()))?;
        let mut link = Link::new(file);
        link.radius = Some(link_radius);
        links.push(link);
    }

    let circos = Builder::default()
        .karyotype(karyotype)
        .plots(plots)
        .links(links)
        .width(args.width)
        .try_build()
        .context("building the configuration")?;

    if args.dry_run {
        print!("{circos}");
        return Ok(());
    }

    let Some(circos_path) = args.circos_path else {
        bail!("`--circos-path` is required unless `--dry-run` is given");
    };

    let image = Renderer::new(circos_path)
        .format(args.format)
        .directory(&args.directory)
        .render(&circos, &args.output)
        .context("running circos")?;

    println!("{}", image.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_stack_inward() -> Result<()> {
        let (r0, r1) = track_radii(0)?;
        assert!((r1 - 0.95).abs() < 1e-9);
        assert!((r0 - 0.87).abs() < 1e-9);

        let (_, r1) = track_radii(1)?;
        assert!((r1 - 0.85).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn test_too_many_tracks() -> Result<()> {
        let (r0, _) = track_radii(8)?;
        assert!(r0 > 0.0);

        assert!(track_radii(9).is_err());
        assert!(track_radii(20).is_err());
        assert_eq!(inner_radius(20), 0.0);

        Ok(())
    }
}
