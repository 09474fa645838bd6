use analytics::{Classification, ElasticityEngine, Observation, SelectionPolicy};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use configuration::{Config, MAX_PRECISION, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the elasticity calculator.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Calculate(args) => handle_calculate(args),
        Commands::Classifications => {
            init_tracing(&Config::default().logging.level);
            print_classifications();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Computes the price elasticity of demand from price/quantity observations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the elasticity of a series of observations.
    Calculate(CalculateArgs),
    /// List every classification and what it means.
    Classifications,
}

#[derive(Parser)]
struct CalculateArgs {
    /// An observation as PRICE:QUANTITY. Repeat in series order.
    #[arg(long = "point", value_name = "PRICE:QUANTITY", allow_hyphen_values = true)]
    points: Vec<Observation>,

    /// A JSON file holding an array of {"price": .., "quantity": ..} objects.
    /// Its observations come before any given with --point.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Which two observations feed the formula (overrides the config file).
    #[arg(long, value_enum)]
    policy: Option<SelectionPolicy>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places for the elasticity value (overrides the config file).
    #[arg(long)]
    precision: Option<usize>,

    /// Path to a TOML configuration file. Defaults to ./elasticity.toml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print every observation as a trend table.
    #[arg(long)]
    show_series: bool,
}

// ==============================================================================
// Calculate Command Logic
// ==============================================================================

fn handle_calculate(args: CalculateArgs) -> anyhow::Result<()> {
    let config = configuration::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging.level);

    let policy = args.policy.unwrap_or(config.calculator.selection);
    let format = args.format.unwrap_or(config.output.format);
    let precision = args.precision.unwrap_or(config.output.precision);
    if precision > MAX_PRECISION {
        bail!("--precision must be at most {}, got {}", MAX_PRECISION, precision);
    }

    let mut observations = match &args.file {
        Some(path) => read_observations(path)?,
        None => Vec::new(),
    };
    observations.extend(args.points);

    tracing::info!(
        observations = observations.len(),
        ?policy,
        "Calculating price elasticity of demand."
    );

    let result = ElasticityEngine::with_policy(policy).calculate(&observations);

    // An invalid result is still a result: it is rendered, not turned into a failure.
    match format {
        OutputFormat::Table => println!(
            "{}",
            render::render_table(&result, &observations, policy, precision, args.show_series)
        ),
        OutputFormat::Json => println!(
            "{}",
            render::render_json(&result).context("Failed to serialize the result")?
        ),
    }

    Ok(())
}

/// Reads a JSON array of observations from disk.
fn read_observations(path: &Path) -> anyhow::Result<Vec<Observation>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read observations from {}", path.display()))?;
    let observations: Vec<Observation> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse observations in {}", path.display()))?;
    tracing::debug!(count = observations.len(), file = %path.display(), "Loaded observations.");
    Ok(observations)
}

fn print_classifications() {
    for classification in Classification::ALL {
        println!("{}\n  {}\n", classification.label(), classification.description());
    }
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
