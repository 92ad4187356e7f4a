mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payment::PaymentArgs;
use commands::rates::RatesArgs;

/// Monthly mortgage payment quotes
#[derive(Parser)]
#[command(
    name = "piti",
    version,
    about = "Monthly mortgage payment (PITI) quotes",
    long_about = "Estimate a monthly mortgage payment with decimal precision: \
                  amortized principal and interest, property-tax escrow, hazard \
                  insurance, FHA mortgage insurance, and HOA fees."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a monthly payment from purchase terms
    Payment(PaymentArgs),
    /// Show the active rate, escrow, and mortgage insurance tables
    Rates(RatesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::Version => {
            println!("piti {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
