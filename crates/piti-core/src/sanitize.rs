//! Raw form-field text sanitation.
//!
//! Currency fields arrive as display text ("$300,000"). Sanitation keeps
//! the digits and rejects text carrying none, rather than silently
//! coercing it to zero.

use rust_decimal::Decimal;

use crate::error::PitiError;
use crate::types::Money;
use crate::PitiResult;

/// Sanitize a currency field: strip every non-digit character and parse
/// the remainder as a whole-unit amount.
pub fn currency(raw: &str) -> PitiResult<Money> {
    let digits = digits_of(raw, "amount")?;
    digits
        .parse::<Decimal>()
        .map_err(|e| PitiError::InvalidInput {
            field: "amount".into(),
            reason: format!("'{digits}' is not a valid amount: {e}"),
        })
}

/// Sanitize a year-count field.
pub fn years(raw: &str) -> PitiResult<u32> {
    let digits = digits_of(raw, "years")?;
    digits.parse::<u32>().map_err(|e| PitiError::InvalidInput {
        field: "years".into(),
        reason: format!("'{digits}' is not a valid year count: {e}"),
    })
}

fn digits_of(raw: &str, field: &str) -> PitiResult<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(PitiError::InvalidInput {
            field: field.into(),
            reason: format!("'{raw}' contains no digits"),
        });
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_strips_formatting() {
        assert_eq!(currency("$300,000").unwrap(), dec!(300000));
        assert_eq!(currency("1 250").unwrap(), dec!(1250));
    }

    #[test]
    fn test_currency_keeps_interleaved_digits() {
        // Mirrors the widget's replace(/[^\d]/g, "") behavior
        assert_eq!(currency("12a3").unwrap(), dec!(123));
    }

    #[test]
    fn test_currency_rejects_digitless_text() {
        assert!(currency("").is_err());
        assert!(currency("abc").is_err());
        assert!(currency("$ ,").is_err());
    }

    #[test]
    fn test_years_parsing() {
        assert_eq!(years("30").unwrap(), 30);
        assert_eq!(years("15 years").unwrap(), 15);
        assert!(years("").is_err());
    }
}
