mod cli;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::cli::config::CliConfig;
use crate::cli::{run, Cli};
use micro_utilities::utils::logger::init_logger;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let config = CliConfig::load(args.config.as_deref())?;

    // Logging is best effort
    if let Err(e) = init_logger(&config.log_filter, config.log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    let outcome = run(&args.command, &config)?;
    println!("{}", outcome.render(args.json)?);

    Ok(if outcome.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
