use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::PitiError;
use crate::types::{Money, Rate};
use crate::PitiResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Periodic rate from an annual rate, monthly compounding.
pub fn monthly_rate(annual: Rate) -> Rate {
    annual / MONTHS_PER_YEAR
}

/// Level monthly payment amortizing `principal` over `nper` months.
///
/// Standard annuity formula: `principal × r / (1 − (1 + r)⁻ⁿ)`.
/// A zero rate degenerates to straight-line `principal / n`.
pub fn monthly_payment(rate: Rate, nper: u32, principal: Money) -> PitiResult<Money> {
    if nper == 0 {
        return Err(PitiError::InvalidInput {
            field: "nper".into(),
            reason: "Number of payments must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let one_plus_r = Decimal::ONE + rate;
    let factor = one_plus_r.powd(Decimal::from(nper));
    let annuity_factor = factor - Decimal::ONE;

    if annuity_factor.is_zero() {
        return Err(PitiError::DivisionByZero {
            context: "amortization annuity factor".into(),
        });
    }

    Ok(principal * rate * factor / annuity_factor)
}

/// Loan-to-value ratio.
pub fn loan_to_value(loan_amount: Money, purchase_price: Money) -> PitiResult<Rate> {
    if purchase_price.is_zero() {
        return Err(PitiError::DivisionByZero {
            context: "loan-to-value (loan_amount / purchase_price)".into(),
        });
    }
    Ok(loan_amount / purchase_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_payment_250k_30yr() {
        // 250,000 at 6.5%/12 over 360 months ≈ 1580.17
        let result = monthly_payment(monthly_rate(dec!(0.065)), 360, dec!(250000)).unwrap();
        assert!(
            (result - dec!(1580.17)).abs() < dec!(0.05),
            "Expected ~1580.17, got {result}"
        );
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let result = monthly_payment(dec!(0), 120, dec!(120000)).unwrap();
        assert_eq!(result, dec!(1000));
    }

    #[test]
    fn test_monthly_payment_zero_principal() {
        let result = monthly_payment(monthly_rate(dec!(0.065)), 360, dec!(0)).unwrap();
        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_payment_zero_term_rejected() {
        assert!(monthly_payment(dec!(0.005), 0, dec!(100000)).is_err());
    }

    #[test]
    fn test_loan_to_value_is_exact() {
        // Decimal division keeps the ratio exact for threshold comparisons
        let ltv = loan_to_value(dec!(180000), dec!(200000)).unwrap();
        assert_eq!(ltv, dec!(0.9));
    }

    #[test]
    fn test_loan_to_value_zero_price_rejected() {
        assert!(loan_to_value(dec!(100000), dec!(0)).is_err());
    }
}
