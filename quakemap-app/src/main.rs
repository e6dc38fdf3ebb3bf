use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quakemap::{Legend, MapBuilder, MapConfig, MapVariant};

/// Compose an earthquake map and print it as JSON.
///
/// Loads the earthquake feed (and, for the tectonic variant, the plate
/// boundary data), styles every event by depth and magnitude and writes the
/// resulting map description for a map widget to render.
#[derive(Parser, Debug)]
#[command(name = "quakemap", author, version, about, long_about = None)]
struct Cli {
    /// Preset to start from: `basic` or `tectonic`
    #[arg(long, default_value = "basic")]
    variant: MapVariant,

    /// JSON config file; overrides the preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Earthquake GeoJSON URL or path
    #[arg(long)]
    quakes: Option<String>,

    /// Plate boundary GeoJSON URL or path
    #[arg(long)]
    boundaries: Option<String>,

    /// Write the map JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print only the depth legend
    #[arg(long)]
    legend: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn map_config(&self) -> Result<MapConfig> {
        let mut config = match &self.config {
            Some(path) => MapConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => self.variant.resolve(),
        };

        if let Some(quakes) = &self.quakes {
            config = config.with_earthquake_source(quakes);
        }
        if let Some(boundaries) = &self.boundaries {
            config = config.with_boundary_source(boundaries);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.legend {
        println!("{}", Legend::default());
        return Ok(());
    }

    let config = cli.map_config()?;
    let view = MapBuilder::new(config)
        .compose()
        .await
        .context("composing earthquake map")?;

    if let Some(url) = view.center_tile_url() {
        log::info!("center tile: {}", url);
    }

    let json = serde_json::to_string_pretty(&view)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote map to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
