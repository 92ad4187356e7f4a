use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PitiError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.065 = 6.5%). Never as percentages.
pub type Rate = Decimal;

/// Loan programme. Keys the note-rate lookup and decides whether a
/// mortgage insurance premium applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    #[default]
    #[serde(rename = "FHA")]
    Fha,
    Conventional,
}

impl FromStr for LoanType {
    type Err = PitiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fha" => Ok(LoanType::Fha),
            "conventional" | "conv" => Ok(LoanType::Conventional),
            other => Err(PitiError::InvalidInput {
                field: "loan_type".into(),
                reason: format!("Unknown loan type '{other}'. Use: fha, conventional"),
            }),
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanType::Fha => write!(f, "FHA"),
            LoanType::Conventional => write!(f, "Conventional"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_type_parsing() {
        assert_eq!("fha".parse::<LoanType>().unwrap(), LoanType::Fha);
        assert_eq!("FHA".parse::<LoanType>().unwrap(), LoanType::Fha);
        assert_eq!(
            " Conventional ".parse::<LoanType>().unwrap(),
            LoanType::Conventional
        );
        assert!("jumbo".parse::<LoanType>().is_err());
    }
}
