mod adapters;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use windvort_core::core_types::{GeoPoint, Kilometers};
use windvort_core::{CardinalObservations, RenderAdapter, Scenario, WindObservation};

use adapters::{ConsoleReporter, CsvWriter, Tee};

/// Wind vorticity report and tracer animation, without a display
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Vorticity weather report and particle wind animation", long_about = None)]
struct Args {
    /// Scenario JSON file; replaces the region, location and observation flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Region name used in the report
    #[arg(long, default_value = "Region")]
    region: String,

    /// Region centre longitude in degrees
    #[arg(long, default_value_t = 80.0, allow_hyphen_values = true)]
    lon: f64,

    /// Region centre latitude in degrees
    #[arg(long, default_value_t = 25.0, allow_hyphen_values = true)]
    lat: f64,

    /// North observation as "speed_kmh,azimuth_deg[,elevation_deg]"
    /// (azimuth is where the wind blows from, counterclockwise from east)
    #[arg(long, allow_hyphen_values = true)]
    north: Option<WindObservation>,

    /// South observation, same format as --north
    #[arg(long, allow_hyphen_values = true)]
    south: Option<WindObservation>,

    /// East observation, same format as --north
    #[arg(long, allow_hyphen_values = true)]
    east: Option<WindObservation>,

    /// West observation, same format as --north
    #[arg(long, allow_hyphen_values = true)]
    west: Option<WindObservation>,

    /// East-west stencil spacing in km
    #[arg(long, default_value_t = 10.0)]
    dx_km: f64,

    /// North-south stencil spacing in km
    #[arg(long, default_value_t = 10.0)]
    dy_km: f64,

    /// Number of tracer particles
    #[arg(short, long)]
    particles: Option<usize>,

    /// Turbulence standard deviation
    #[arg(short, long)]
    turbulence: Option<f64>,

    /// Wind (m/s) to map degrees per frame
    #[arg(long)]
    speed_scale: Option<f64>,

    /// Number of animation frames
    #[arg(short, long)]
    frames: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write every particle position to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a progress row every N frames
    #[arg(short, long, default_value_t = 20)]
    report_interval: u64,
}

impl Args {
    /// Scenario from `--config`, or from the flags when no file is given.
    /// Tracer and animation flags override either source.
    fn scenario(&self) -> anyhow::Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Scenario::from_json_str(&json)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => self.scenario_from_flags()?,
        };

        if let Some(count) = self.particles {
            scenario.particles.count = count;
        }
        if let Some(turbulence) = self.turbulence {
            scenario.particles.turbulence = turbulence;
        }
        if let Some(scale) = self.speed_scale {
            scenario.particles.speed_scale = scale;
        }
        if let Some(seed) = self.seed {
            scenario.particles.seed = Some(seed);
        }
        if let Some(frames) = self.frames {
            scenario.animation.frames = frames;
        }
        Ok(scenario)
    }

    fn scenario_from_flags(&self) -> anyhow::Result<Scenario> {
        let (Some(north), Some(south), Some(east), Some(west)) =
            (self.north, self.south, self.east, self.west)
        else {
            bail!("either --config or all of --north, --south, --east and --west are required");
        };

        Ok(Scenario::new(
            self.region.clone(),
            GeoPoint::new(self.lon, self.lat),
            CardinalObservations::new(north, south, east, west),
            Kilometers::new(self.dx_km),
            Kilometers::new(self.dy_km),
        ))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let scenario = args.scenario()?;

    let analysis = scenario.analyse().context("invalid observations or map settings")?;
    let mut field = scenario
        .particle_field(&analysis)
        .context("invalid particle settings")?;
    let animation = scenario.animation();

    info!(
        region = %scenario.region,
        particles = field.len(),
        frames = animation.frames,
        "Running headless animation"
    );

    let mut console = ConsoleReporter::new(args.report_interval);
    let stats = match &args.csv {
        Some(path) => {
            let mut csv = CsvWriter::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let stats = {
                let adapters: Vec<&mut dyn RenderAdapter> = vec![&mut console, &mut csv];
                animation.run(&analysis.overview, &mut field, &mut Tee::new(adapters))
            };
            let (_, rows) = csv
                .close()
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {rows} rows to {}", path.display());
            stats
        }
        None => animation.run(&analysis.overview, &mut field, &mut console),
    };

    println!("Frames: {}", stats.frames);
    println!("Re-injections: {}", stats.reinjected);
    println!(
        "Playback at {} ms/frame: {:.1} s",
        animation.interval.as_millis(),
        animation.duration().as_secs_f64()
    );
    Ok(())
}
