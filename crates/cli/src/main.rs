//! Lexforge CLI — the main entry point.
//!
//! Commands:
//! - `generate`           — Render contract + deployment + test artifacts
//! - `validate`           — Check a definition file, reporting every defect
//! - `list-types`         — List supported contract types
//! - `list-jurisdictions` — List supported jurisdictions
//! - `deploy`             — Print manual deployment instructions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "lexforge",
    about = "Lexforge — jurisdiction-aware smart contract generation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a smart contract with deployment and test scripts
    Generate {
        /// TOML contract definition file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Contract type for a starter definition (escrow, insurance, settlement)
        #[arg(short = 't', long = "type")]
        contract_type: Option<String>,

        /// Jurisdiction for a starter definition (india, eu, us)
        #[arg(short, long)]
        jurisdiction: Option<String>,

        /// Output directory for generated artifacts
        #[arg(short, long, default_value = "contracts")]
        output: PathBuf,

        /// Generate for every supported jurisdiction
        #[arg(long)]
        all: bool,
    },

    /// Validate a contract definition file
    Validate {
        /// TOML contract definition file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List supported contract types
    ListTypes,

    /// List supported jurisdictions
    ListJurisdictions,

    /// Show deployment instructions for a generated contract
    Deploy {
        /// Generated contract file
        #[arg(short, long)]
        contract: PathBuf,

        /// Target network
        #[arg(short, long, default_value = "localhost:8545")]
        network: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            file,
            contract_type,
            jurisdiction,
            output,
            all,
        } => commands::generate::run(file, contract_type, jurisdiction, &output, all)?,
        Commands::Validate { file } => commands::validate::run(&file)?,
        Commands::ListTypes => commands::list::types(),
        Commands::ListJurisdictions => commands::list::jurisdictions()?,
        Commands::Deploy { contract, network } => commands::deploy::run(&contract, &network),
    }

    Ok(())
}
