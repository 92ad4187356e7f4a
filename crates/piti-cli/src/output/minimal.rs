use rust_decimal::Decimal;
use serde_json::Value;

use super::scalar_string;

/// Print just the key answer value from the output.
///
/// For a payment quote that is the total monthly payment rounded to two
/// decimal places, with the MIP rate (as a percentage) alongside when one
/// applies; otherwise the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(total) = map.get("total_monthly_payment") {
            match decimal_of(map.get("mip_rate")) {
                Some(rate) if !rate.is_zero() => {
                    let pct = (rate * Decimal::ONE_HUNDRED).round_dp(2);
                    println!("{} (MIP {}%)", rounded(total), pct);
                }
                _ => println!("{}", rounded(total)),
            }
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_string(val));
            return;
        }
    }

    println!("{}", scalar_string(result_obj));
}

fn decimal_of(value: Option<&Value>) -> Option<Decimal> {
    value.and_then(|v| scalar_string(v).parse::<Decimal>().ok())
}

fn rounded(value: &Value) -> String {
    // Decimals cross the JSON boundary as strings; round to cents
    match scalar_string(value).parse::<Decimal>() {
        Ok(d) => d.round_dp(2).to_string(),
        Err(_) => scalar_string(value),
    }
}
