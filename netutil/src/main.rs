mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CliArgs, Command};
use common::NetUtilConfig;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();

    let mut cfg = NetUtilConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    // Override with command line arguments
    if let Some(log_level) = args.log_level {
        cfg.logging.level = log_level;
    }
    if let Some(log_dir) = args.log_dir {
        cfg.logging.dir = Some(log_dir);
    }

    let _guard = common::init_tracing(&cfg.logging)?;
    info!("Running {:?}", args.command);

    match run(args.command, &cfg) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(command: Command, cfg: &NetUtilConfig) -> Result<()> {
    match command {
        Command::ToBytes { address } => println!("{}", commands::to_bytes(&address)?),
        Command::ToText { hex } => println!("{}", commands::to_text(&hex)?),
        Command::ToNet { dotted } => println!("{}", commands::to_net(&dotted)?),
        Command::FromNet { value } => println!("{}", commands::from_net(value)),
        Command::Interfaces { no_loopback } => {
            let include_loopback = cfg.interfaces.include_loopback && !no_loopback;
            for (n, interface) in commands::interfaces(include_loopback)?.iter().enumerate() {
                println!("{} - {} ({})", n, interface.address, interface.name);
            }
        }
        Command::Validate { endpoints } => {
            let verdicts = commands::validate(&endpoints);
            for verdict in &verdicts {
                println!("{}", commands::describe(verdict));
            }
            commands::ensure_all_valid(&verdicts)?;
        }
    }
    Ok(())
}
