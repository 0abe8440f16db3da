use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ecotally_core::error::EcotallyError;
use ecotally_core::factors::FactorTable;
use ecotally_core::service;
use ecotally_schemas::input::{CalculationRequest, ElectricityInput, TransportInput};
use ecotally_schemas::result::ErrorBody;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod history;
mod request;

#[derive(Parser, Debug)]
#[command(name = "ecotally", version, about = "Carbon footprint estimator")]
struct Cli {
    /// Custom coefficient dataset (.json, .yaml or .yml); defaults to the
    /// built-in table
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one emissions calculation and print the result as JSON
    Calculate(CalculateArgs),
    /// Print the active coefficient dataset as JSON
    Factors,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Request file (.json, .yaml or .yml); '-' reads JSON from stdin
    #[arg(long, conflicts_with_all = ["car_miles", "flight_miles", "transit_miles", "kwh", "diet", "country"])]
    request: Option<PathBuf>,

    /// Annual car miles
    #[arg(long)]
    car_miles: Option<f64>,

    /// Annual flight miles
    #[arg(long)]
    flight_miles: Option<f64>,

    /// Annual public transit miles
    #[arg(long)]
    transit_miles: Option<f64>,

    /// Annual electricity usage in kWh
    #[arg(long)]
    kwh: Option<f64>,

    /// Diet: omnivore, vegetarian or vegan
    #[arg(long)]
    diet: Option<String>,

    /// Country: USA, UK, Germany, India, China or Global
    #[arg(long)]
    country: Option<String>,

    /// Pretty-print the response JSON
    #[arg(long)]
    pretty: bool,

    /// Append a summary row to this local history file (keeps the most
    /// recent entries only)
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .context("Failed to initialize logging")?;

    let cli = Cli::parse();

    let table = match &cli.dataset {
        Some(path) => {
            log::info!("loading coefficient dataset from {}", path.display());
            FactorTable::from_path(path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))?
        }
        None => FactorTable::builtin(),
    };

    match cli.command {
        Command::Calculate(args) => run_calculation(&args, &table),
        Command::Factors => {
            println!("{}", serde_json::to_string_pretty(&table)?);
            Ok(())
        }
    }
}

fn run_calculation(args: &CalculateArgs, table: &FactorTable) -> Result<()> {
    let calculation_request = match &args.request {
        Some(path) => request::load(path)?,
        None => match request_from_flags(args)? {
            Ok(request) => request,
            Err(error) => return emit_error(error),
        },
    };

    match service::calculate_response(&calculation_request, table) {
        Ok(result) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");

            if let Some(path) = &args.history {
                let entry = history::HistoryEntry::new(&calculation_request, &result);
                history::append(path, entry)?;
                log::info!("history written to {}", path.display());
            }
            Ok(())
        }
        Err(error) => emit_error(error),
    }
}

/// Prints the machine-readable error payload on stderr and exits non-zero:
/// 2 for a caller mistake, 1 for a dataset or internal failure.
fn emit_error(error: EcotallyError) -> Result<()> {
    let body = ErrorBody {
        reason: error.reason_code().to_string(),
        detail: error.to_string(),
    };
    eprintln!("{}", serde_json::to_string(&body)?);
    std::process::exit(if error.is_validation() { 2 } else { 1 });
}

/// Assembles a request from individual flags, the form-field path.
/// Missing numeric fields default to zero, like the wire format does.
/// The inner error is the validation class, reported as an error payload.
fn request_from_flags(args: &CalculateArgs) -> Result<Result<CalculationRequest, EcotallyError>> {
    let Some(diet) = &args.diet else {
        bail!("either --request or --diet is required");
    };
    let diet = match service::parse_diet(diet) {
        Ok(diet) => diet,
        Err(error) => return Ok(Err(error)),
    };
    let country = match &args.country {
        Some(country) => match service::parse_country(country) {
            Ok(country) => country,
            Err(error) => return Ok(Err(error)),
        },
        None => Default::default(),
    };

    Ok(Ok(CalculationRequest {
        transport: TransportInput {
            car_miles: args.car_miles.unwrap_or(0.0),
            flight_miles: args.flight_miles.unwrap_or(0.0),
            public_transit_miles: args.transit_miles.unwrap_or(0.0),
        },
        diet,
        electricity: ElectricityInput {
            usage_kwh: args.kwh.unwrap_or(0.0),
        },
        country,
    }))
}
