//! sheetsum - spreadsheet checksums and spiral step counts

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::PolicyChoice;
use sheetsum_core::{Spreadsheet, load_spreadsheet, read_spreadsheet, spiral_index, step_count};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetsum", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print checksums of a whitespace-separated integer spreadsheet
    Checksum {
        /// Checksum to print (defaults to the configured policy)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyChoice>,

        /// Spreadsheet file; reads stdin when absent or "-"
        file: Option<PathBuf>,
    },
    /// Spiral grid addressing
    Spiral {
        #[command(subcommand)]
        command: SpiralCommands,
    },
}

#[derive(Subcommand)]
enum SpiralCommands {
    /// Print the x,y offset of a spiral cell
    Coords { addr: u64 },
    /// Print the number of steps from a spiral cell back to cell 1
    Steps { addr: u64 },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Checksum { policy, file } => {
            let config = config::load_config(cli.config.as_deref())?;
            let policy = policy.unwrap_or(config.policy);
            let sheet = read_input(file.as_deref())?;
            for &p in policy.policies() {
                let sum = sheet
                    .checksum(p)
                    .with_context(|| format!("Failed to compute {} checksum", p))?;
                println!("{}", sum);
            }
        }
        Commands::Spiral { command } => match command {
            SpiralCommands::Coords { addr } => {
                let (x, y) = spiral_index(addr)?;
                println!("{},{}", x, y);
            }
            SpiralCommands::Steps { addr } => {
                println!("{}", step_count(addr)?);
            }
        },
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<Spreadsheet> {
    match file {
        Some(path) if path != Path::new("-") => load_spreadsheet(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        _ => read_spreadsheet(std::io::stdin().lock()).context("Failed to read stdin"),
    }
}
