use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legend_snap::{LegendNormalizer, NormalizeOptions};
use mapwash::config::LegendConfig;
use mapwash::raster;

#[derive(Parser)]
#[command(name = "mapwash")]
#[command(about = "Snap noisy game-map rasters onto a fixed legend palette")]
#[command(version)]
struct Cli {
    /// Input PNG file
    #[arg(short, long)]
    input: PathBuf,

    /// Cleaned output PNG file
    #[arg(short, long, default_value = "map_clean.png")]
    output: PathBuf,

    /// Diff overlay PNG file (changed pixels highlighted red)
    #[arg(short, long, default_value = "map_diff.png")]
    diff: PathBuf,

    /// Legend YAML file (built-in game-map legend when omitted)
    #[arg(short, long)]
    legend: Option<PathBuf>,

    /// Median pre-filter window size (0 disables)
    #[arg(long, default_value_t = 3)]
    median: usize,

    /// Number of majority-vote smoothing passes (0 disables)
    #[arg(long, default_value_t = 2)]
    mode_iters: usize,

    /// Voting neighborhood radius (1 = 3x3 blocks)
    #[arg(long, default_value_t = 1)]
    radius: usize,

    /// Maximum delta-E to remap a pixel; pixels beyond it keep their
    /// original color and are reported separately
    #[arg(long)]
    threshold: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapwash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let legend = LegendConfig::load(cli.legend.as_deref())?;
    let palette = legend.to_palette()?;

    let raster = raster::load_png(&cli.input)?;
    tracing::info!(
        input = %cli.input.display(),
        width = raster.width,
        height = raster.height,
        "Loaded raster"
    );

    let mut options = NormalizeOptions::new()
        .median_window(cli.median)
        .mode_iterations(cli.mode_iters)
        .neighborhood_radius(cli.radius);
    if let Some(t) = cli.threshold {
        options = options.distance_threshold(t);
    }

    let normalizer = LegendNormalizer::new(palette).options(options);
    let map = normalizer.normalize(&raster.pixels, raster.width, raster.height)?;

    let cleaned = map.to_rgb();
    let diff = map.diff();
    let summary = map.summary(&diff);

    raster::write_output_pair(
        (&cleaned, &cli.output),
        (diff.pixels(), &cli.diff),
        raster.width,
        raster.height,
    )?;

    tracing::info!(
        output = %cli.output.display(),
        diff = %cli.diff.display(),
        "Wrote outputs"
    );

    for entry in &summary.entries {
        tracing::info!(
            label = %entry.label,
            color = %format!("#{:02X}{:02X}{:02X}", entry.rgb[0], entry.rgb[1], entry.rgb[2]),
            count = entry.count,
            "Legend entry"
        );
    }
    tracing::info!(
        changed = summary.changed_count,
        changed_percent = %format!("{:.2}", summary.changed_percent),
        mean_distance = %format!("{:.3}", summary.mean_distance),
        max_distance = %format!("{:.3}", summary.max_distance),
        "Normalization complete"
    );
    if summary.flagged_count > 0 {
        tracing::warn!(
            flagged = summary.flagged_count,
            "Pixels over the distance threshold kept their original color"
        );
    }

    Ok(())
}
