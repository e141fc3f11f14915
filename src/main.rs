//! Holder Snapshot CLI
//!
//! Builds token holder distribution snapshots across chains.
//! Writes a stable JSON document and optionally prints a summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use holder_distribution::commands::{
    display_schema, display_version, execute_snapshot, validate_args, validate_snapshot_file,
    SnapshotArgs,
};
use holder_distribution::source::ChainSpec;
use holder_distribution::utils::config::{DEFAULT_MEGA_HOLDER_THRESHOLD, DEFAULT_RETAIL_THRESHOLD};

/// Holder Snapshot - token holder distribution across chains
#[derive(Parser, Debug)]
#[command(name = "holder-snapshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate holder rows and write a snapshot
    Snapshot {
        /// JSON file with rows for every chain
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Holder source endpoint (instead of --input)
        #[arg(long, env = "HOLDER_SOURCE_URL")]
        source_url: Option<String>,

        /// Bearer token for the holder source
        #[arg(long, env = "HOLDER_SOURCE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Chain to fetch, as `key` or `key:Label` (repeatable)
        #[arg(short, long = "chain")]
        chains: Vec<ChainSpec>,

        /// Denylist file (JSON array or one address per line)
        #[arg(short, long, env = "DENYLIST_PATH")]
        denylist: Option<PathBuf>,

        /// Minimum balance for a retail holder
        #[arg(long, env = "RETAIL_THRESHOLD", default_value_t = DEFAULT_RETAIL_THRESHOLD)]
        retail_threshold: f64,

        /// Balances above this are excluded as mega-holders
        #[arg(long, env = "MEGA_HOLDER_THRESHOLD", default_value_t = DEFAULT_MEGA_HOLDER_THRESHOLD)]
        mega_holder_threshold: f64,

        /// Token total supply reported in the snapshot
        #[arg(long, env = "TOTAL_SUPPLY", default_value_t = 0.0)]
        total_supply: f64,

        /// Output path for the JSON snapshot
        #[arg(short, long, default_value = "holders.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a snapshot JSON file
    Validate {
        /// Path to snapshot JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Snapshot {
            input,
            source_url,
            api_key,
            chains,
            denylist,
            retail_threshold,
            mega_holder_threshold,
            total_supply,
            output,
            summary,
        } => {
            let args = SnapshotArgs {
                // An explicit input file wins over a source URL picked up from the environment
                source_url: if input.is_some() { None } else { source_url },
                input,
                api_key,
                chains,
                denylist,
                retail_threshold,
                mega_holder_threshold,
                total_supply,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_snapshot(args)?;
        }

        Commands::Validate { file } => {
            validate_snapshot_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
