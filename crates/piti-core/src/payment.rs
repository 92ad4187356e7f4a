//! Monthly payment engine: a pure mapping from a quote input snapshot to
//! a PITI breakdown.
//!
//! The engine holds no state between calls. Every recomputation receives
//! a fresh `QuoteInput`; mutable form state stays with the caller.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization;
use crate::config::QuoteConfig;
use crate::error::PitiError;
use crate::types::{with_metadata, ComputationOutput, LoanType, Money, Rate};
use crate::PitiResult;

/// FHA maximum financing LTV; quotes above it carry a warning.
const FHA_MAX_LTV: Decimal = dec!(0.965);

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of the quote form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteInput {
    /// Total price of the property.
    pub purchase_price: Money,
    /// Cash paid upfront.
    pub down_payment: Money,
    /// Loan term in whole years.
    pub loan_term_years: u32,
    /// Flat monthly HOA fee, added to the total verbatim.
    #[serde(default)]
    pub hoa_monthly: Money,
    /// Loan programme.
    pub loan_type: LoanType,
}

/// Monthly payment breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Financed amount: purchase price minus down payment.
    pub loan_amount: Money,
    /// Loan-to-value ratio.
    pub loan_to_value: Rate,
    /// Annual note rate applied.
    pub interest_rate_annual: Rate,
    /// Total number of monthly payments.
    pub number_of_payments: u32,
    /// Amortized principal and interest.
    pub principal_and_interest: Money,
    /// Monthly property-tax escrow.
    pub property_tax: Money,
    /// Flat hazard insurance estimate.
    pub hazard_insurance: Money,
    /// Annual mortgage insurance rate (zero for conventional loans).
    pub mip_rate: Rate,
    /// Monthly mortgage insurance premium.
    pub mortgage_insurance: Money,
    /// Monthly HOA fee.
    pub hoa: Money,
    /// Sum of all monthly components.
    pub total_monthly_payment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Quote the estimated monthly payment for a purchase.
///
/// Deterministic and side-effect free: the same input and config always
/// produce the same breakdown, and `total_monthly_payment` is always the
/// exact sum of the component figures plus HOA.
pub fn quote_payment(
    input: &QuoteInput,
    config: &QuoteConfig,
) -> PitiResult<ComputationOutput<PaymentBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let loan_amount = input.purchase_price - input.down_payment;
    let loan_to_value = amortization::loan_to_value(loan_amount, input.purchase_price)?;

    let interest_rate_annual = config.rate_for(input.loan_type);
    let monthly_rate = amortization::monthly_rate(interest_rate_annual);
    let number_of_payments = input.loan_term_years * 12;

    let principal_and_interest =
        amortization::monthly_payment(monthly_rate, number_of_payments, loan_amount)?;

    let property_tax = input.purchase_price * config.property_tax_rate_annual / MONTHS_PER_YEAR;
    let hazard_insurance = config.hazard_insurance_monthly;

    // MIP applies to FHA loans only. The tier rate is looked up even for
    // a fully paid-down loan (the premium itself is then zero).
    let (mip_rate, mortgage_insurance) = match input.loan_type {
        LoanType::Fha => {
            let rate = config.mip.rate_for(loan_to_value, input.loan_term_years);
            (rate, loan_amount * rate / MONTHS_PER_YEAR)
        }
        LoanType::Conventional => (Decimal::ZERO, Decimal::ZERO),
    };

    if input.loan_type == LoanType::Fha && loan_to_value > FHA_MAX_LTV {
        warnings.push(format!(
            "LTV {:.1}% exceeds FHA maximum financing of 96.5%",
            loan_to_value * dec!(100)
        ));
    }
    if input.down_payment.is_zero() {
        warnings.push("Down payment is zero — 100% financing".into());
    }

    let total_monthly_payment = principal_and_interest
        + property_tax
        + hazard_insurance
        + mortgage_insurance
        + input.hoa_monthly;

    let output = PaymentBreakdown {
        loan_amount,
        loan_to_value,
        interest_rate_annual,
        number_of_payments,
        principal_and_interest,
        property_tax,
        hazard_insurance,
        mip_rate,
        mortgage_insurance,
        hoa: input.hoa_monthly,
        total_monthly_payment,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "PITI Monthly Payment (Fixed-Rate Amortization)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &QuoteInput) -> PitiResult<()> {
    if input.purchase_price <= Decimal::ZERO {
        return Err(PitiError::InvalidInput {
            field: "purchase_price".into(),
            reason: "Purchase price must be positive".into(),
        });
    }

    if input.loan_term_years == 0 {
        return Err(PitiError::InvalidInput {
            field: "loan_term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    if input.down_payment < Decimal::ZERO {
        return Err(PitiError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot be negative".into(),
        });
    }

    if input.down_payment > input.purchase_price {
        return Err(PitiError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot exceed purchase price".into(),
        });
    }

    if input.hoa_monthly < Decimal::ZERO {
        return Err(PitiError::InvalidInput {
            field: "hoa_monthly".into(),
            reason: "HOA fee cannot be negative".into(),
        });
    }

    Ok(())
}
