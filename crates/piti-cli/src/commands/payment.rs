use clap::Args;
use serde_json::Value;

use piti_core::config::QuoteConfig;
use piti_core::payment::{self, QuoteInput};
use piti_core::sanitize;
use piti_core::types::LoanType;

use crate::input;

/// Arguments for a payment quote
#[derive(Args)]
pub struct PaymentArgs {
    /// Path to a JSON file holding a full quote input
    #[arg(long)]
    pub input: Option<String>,

    /// Total purchase price (currency text accepted, e.g. "$300,000")
    #[arg(long)]
    pub purchase_price: Option<String>,

    /// Upfront down payment (currency text accepted)
    #[arg(long)]
    pub down_payment: Option<String>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<String>,

    /// Monthly HOA fee
    #[arg(long, default_value = "0")]
    pub hoa: String,

    /// Loan programme: fha or conventional
    #[arg(long, default_value = "fha")]
    pub loan_type: String,

    /// Path to a JSON or YAML pricing config override
    #[arg(long)]
    pub config: Option<String>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input = resolve_input(&args)?;
    let config = load_config(&args.config)?;
    let result = payment::quote_payment(&quote_input, &config)?;
    Ok(serde_json::to_value(result)?)
}

fn resolve_input(args: &PaymentArgs) -> Result<QuoteInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }

    if let (Some(price), Some(down), Some(term)) =
        (&args.purchase_price, &args.down_payment, &args.term_years)
    {
        return Ok(QuoteInput {
            purchase_price: sanitize::currency(price)?,
            down_payment: sanitize::currency(down)?,
            loan_term_years: sanitize::years(term)?,
            hoa_monthly: sanitize::currency(&args.hoa)?,
            loan_type: args.loan_type.parse::<LoanType>()?,
        });
    }

    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    Err("Provide --purchase-price, --down-payment and --term-years, \
         or --input <file.json>, or pipe JSON via stdin"
        .into())
}

pub(crate) fn load_config(
    path: &Option<String>,
) -> Result<QuoteConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => input::file::read_config(p),
        None => Ok(QuoteConfig::default()),
    }
}
