mod cli;
mod commands;
mod error;
mod input;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("ffkit CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting Rayon global thread pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e)))?;
    }

    let command_result = match cli.command {
        Commands::List => {
            info!("Dispatching to 'list' command.");
            commands::list::run()
        }
        Commands::Types(args) => {
            info!("Dispatching to 'types' command.");
            commands::types::run(args)
        }
        Commands::Energy(args) => {
            info!("Dispatching to 'energy' command.");
            commands::energy::run(args)
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }
    command_result
}
