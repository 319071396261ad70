//! Command-line front end for the CarAudio calculators
//!
//! Every subcommand reads its input record as JSON (inline, from a file or
//! from stdin) and prints the result as pretty JSON on stdout.

mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use caraudio_core::calculator::{CalculationRequest, Calculator};
use caraudio_core::catalog::CatalogSnapshot;
use caraudio_core::compatibility::{evaluate_compatibility, SystemConfiguration};
use caraudio_core::config::CalculatorConfig;
use caraudio_core::stats::UsageCounters;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "caraudio")]
#[command(version, about = "Car audio engineering calculators", long_about = None)]
struct Cli {
    /// JSON file with AWG and fuse rating tables
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enclosure volume for a sealed or ported box
    Box(JsonInput),
    /// Port length, area and air velocity
    Port(JsonInput),
    /// Power cable cross-section and AWG equivalent
    Cable(JsonInput),
    /// Main fuse rating and holder type
    Fuse(JsonInput),
    /// Net impedance of a speaker group
    Wiring(JsonInput),
    /// Tagged request: {"calculator": "...", "params": {...}}
    Run(JsonInput),
    /// Check a system configuration against a component catalog
    Compat {
        /// System configuration JSON file
        #[arg(long)]
        config_file: PathBuf,

        /// Component catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(Args)]
struct JsonInput {
    /// Input record as inline JSON; read from stdin when omitted
    #[arg(value_name = "JSON", conflicts_with = "input")]
    json: Option<String>,

    /// Read the input record from a file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl JsonInput {
    fn read(&self) -> Result<String> {
        if let Some(json) = &self.json {
            return Ok(json.clone());
        }
        if let Some(path) = &self.input {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()));
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        Ok(buffer)
    }

    fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let text = self.read()?;
        serde_json::from_str(&text).context("Input is not a valid record for this calculator")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = match &cli.settings {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let counters = Arc::new(UsageCounters::new());
    let calculator = Calculator::new(config, counters.clone());

    let request = match &cli.command {
        Commands::Box(input) => CalculationRequest::Box(input.parse()?),
        Commands::Port(input) => CalculationRequest::Port(input.parse()?),
        Commands::Cable(input) => CalculationRequest::Cable(input.parse()?),
        Commands::Fuse(input) => CalculationRequest::Fuse(input.parse()?),
        Commands::Wiring(input) => CalculationRequest::Wiring(input.parse()?),
        Commands::Run(input) => input.parse()?,
        Commands::Compat {
            config_file,
            catalog,
        } => {
            let text = fs::read_to_string(config_file).with_context(|| {
                format!("Failed to read configuration {}", config_file.display())
            })?;
            let system: SystemConfiguration =
                serde_json::from_str(&text).context("Invalid system configuration")?;
            let catalog = CatalogSnapshot::load(catalog)
                .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
            tracing::debug!(components = catalog.len(), "Loaded catalog");

            let report = evaluate_compatibility(&system, &catalog)?;
            return print_json(&report);
        }
    };

    let response = calculator
        .calculate(&request)
        .with_context(|| format!("{} calculation failed", request.name()))?;
    tracing::debug!(
        calculations = counters.snapshot().calculations,
        "Calculation complete"
    );
    print_json(&response)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
