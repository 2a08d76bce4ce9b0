mod io;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use datamock_core::SchemaError;

#[derive(Debug, Error)]
enum CliError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Parser, Debug)]
#[command(name = "datamock", version, about = "Schema-driven mock data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a record collection from a schema file.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Source schema file (JSON).
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
    /// Destination file; defaults to `<schema-stem>.data.json` beside the source.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Seed for the random source; seeded from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let start = Instant::now();
    let run_id = Uuid::new_v4().to_string();

    let schema = io::load_schema(&args.schema)?;
    info!(
        run_id = %run_id,
        schema = %args.schema.display(),
        fields = schema.len(),
        "schema loaded"
    );

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let records = datamock_generate::generate(&schema, &mut rng)?;

    let destination = args
        .out
        .unwrap_or_else(|| io::default_destination(&args.schema));
    let bytes = io::write_records(&destination, &records)?;
    info!(
        run_id = %run_id,
        destination = %destination.display(),
        records = records.len(),
        bytes,
        duration_ms = start.elapsed().as_millis() as u64,
        "records written"
    );

    Ok(())
}
