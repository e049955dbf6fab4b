//! NeoSentinel - Meteorite Impact Estimator
//!
//! Command-line front end: pick an asteroid (or give H directly) and a point
//! of impact, and print the impact report, the JSON simulation record or the
//! damage-assessment prompt.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;

use neosentinel::assessment::AssessmentRequest;
use neosentinel::catalog::{AsteroidCatalog, CatalogError, SizeClass};
use neosentinel::impact::{DomainError, ImpactInput, calculate_impact_metrics_with};
use neosentinel::report::ImpactReport;
use neosentinel::simulation::simulate_impact_with;
use neosentinel::types::{Coordinates, METERS_PER_KM, PhysicalConstants};

/// Bulk composition preset.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Composition {
    #[default]
    Stony,
    Carbonaceous,
    Metallic,
}

impl Composition {
    fn constants(self) -> PhysicalConstants {
        match self {
            Composition::Stony => PhysicalConstants::stony(),
            Composition::Carbonaceous => PhysicalConstants::carbonaceous(),
            Composition::Metallic => PhysicalConstants::metallic(),
        }
    }
}

/// What to print.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable report table.
    #[default]
    Table,
    /// Simulation record as JSON.
    Json,
    /// Prompt text for the damage assessment model.
    Prompt,
}

#[derive(Parser)]
#[command(about = "Estimate the effects of a meteorite impact")]
struct CliArgs {
    /// Absolute magnitude H of the impactor.
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    magnitude: Option<f64>,

    /// Asteroid catalog JSON file.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Full name of the catalog asteroid to simulate.
    #[arg(long, requires = "catalog", conflicts_with = "magnitude")]
    asteroid: Option<String>,

    /// List the catalog with size estimates and exit.
    #[arg(long, requires = "catalog")]
    list: bool,

    /// Impact latitude in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,

    /// Impact longitude in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lng: f64,

    /// Display name when H is given directly.
    #[arg(long, default_value = "Custom impactor")]
    name: String,

    /// Bulk composition preset.
    #[arg(long, value_enum, default_value_t = Composition::default())]
    preset: Composition,

    /// Geometric albedo override, in (0, 1].
    #[arg(long)]
    albedo: Option<f64>,

    /// Bulk density override in kg/m³.
    #[arg(long)]
    density: Option<f64>,

    /// Impact velocity override in km/s.
    #[arg(long)]
    velocity: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    output: OutputFormat,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("either --magnitude or --catalog with --asteroid is required")]
    MissingImpactor,
}

impl CliArgs {
    fn constants(&self) -> PhysicalConstants {
        let mut constants = self.preset.constants();
        if let Some(albedo) = self.albedo {
            constants = constants.with_albedo(albedo);
        }
        if let Some(density) = self.density {
            constants = constants.with_density(density);
        }
        if let Some(velocity) = self.velocity {
            constants = constants.with_impact_velocity(velocity * METERS_PER_KM);
        }
        constants
    }
}

fn list_catalog(catalog: &AsteroidCatalog, constants: &PhysicalConstants) {
    for asteroid in catalog {
        let input = ImpactInput::new(asteroid.h);
        match calculate_impact_metrics_with(input, constants) {
            Ok(metrics) => println!(
                "{:<40} H={:>6.2}  D={:>10} m  [{}]{}",
                asteroid.name(),
                asteroid.h,
                metrics.display.diameter_m,
                SizeClass::from_diameter_m(metrics.diameter_m),
                if asteroid.is_hazardous() { "  PHA" } else { "" }
            ),
            Err(e) => println!("{:<40} H={:>6.2}  ({e})", asteroid.name(), asteroid.h),
        }
    }

    let distribution = catalog.size_distribution();
    println!();
    for (class, count) in distribution.iter() {
        println!("{class:>10}: {count}");
    }
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let constants = args.constants();
    let catalog = args
        .catalog
        .as_ref()
        .map(AsteroidCatalog::load)
        .transpose()?;

    if args.list {
        if let Some(catalog) = &catalog {
            list_catalog(catalog, &constants);
        }
        return Ok(());
    }

    let coords = Coordinates::new(args.lat, args.lng);
    let simulation = match (&catalog, &args.asteroid, args.magnitude) {
        (Some(catalog), Some(name), _) => {
            catalog.get(name)?.simulate_impact(coords, &constants)?
        }
        (_, _, Some(h)) => simulate_impact_with(&args.name, h, coords, &constants)?,
        _ => return Err(CliError::MissingImpactor),
    };

    match args.output {
        OutputFormat::Table => print!("{}", ImpactReport::from_simulation(&simulation)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&simulation)?),
        OutputFormat::Prompt => {
            print!("{}", AssessmentRequest::from_simulation(&simulation).prompt())
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }

    let args = CliArgs::parse();
    info!("Starting NeoSentinel");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
