use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use piti_core::config::{MipSchedule, QuoteConfig};
use piti_core::types::{LoanType, Money, Rate};

use super::payment::load_config;

/// Arguments for inspecting the active pricing tables
#[derive(Args)]
pub struct RatesArgs {
    /// Path to a JSON or YAML pricing config override
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProgrammeRate {
    loan_type: LoanType,
    rate_annual: Rate,
    label: String,
}

#[derive(Debug, Serialize)]
struct RatesOutput {
    programmes: Vec<ProgrammeRate>,
    property_tax_rate_annual: Rate,
    hazard_insurance_monthly: Money,
    mip: MipSchedule,
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    Ok(serde_json::to_value(rates_output(&config))?)
}

fn rates_output(config: &QuoteConfig) -> RatesOutput {
    let programmes = [LoanType::Fha, LoanType::Conventional]
        .into_iter()
        .map(|loan_type| {
            let rate_annual = config.rate_for(loan_type);
            let pct = (rate_annual * Decimal::ONE_HUNDRED).round_dp(2);
            ProgrammeRate {
                loan_type,
                rate_annual,
                label: format!("{loan_type} ({pct}%)"),
            }
        })
        .collect();

    RatesOutput {
        programmes,
        property_tax_rate_annual: config.property_tax_rate_annual,
        hazard_insurance_monthly: config.hazard_insurance_monthly,
        mip: config.mip.clone(),
    }
}
