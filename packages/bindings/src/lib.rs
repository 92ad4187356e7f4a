use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payment quotes
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_payment(input_json: String) -> NapiResult<String> {
    let input: piti_core::payment::QuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = piti_core::config::QuoteConfig::default();
    let output = piti_core::payment::quote_payment(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn quote_payment_with_config(input_json: String, config_json: String) -> NapiResult<String> {
    let input: piti_core::payment::QuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config: piti_core::config::QuoteConfig =
        serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let output = piti_core::payment::quote_payment(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Headline figure for the widget: total monthly payment rounded to cents.
#[napi]
pub fn quote_total(input_json: String) -> NapiResult<String> {
    let input: piti_core::payment::QuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = piti_core::config::QuoteConfig::default();
    let output = piti_core::payment::quote_payment(&input, &config).map_err(to_napi_error)?;
    let total: Decimal = output.result.total_monthly_payment;
    Ok(total.round_dp(2).to_string())
}

// ---------------------------------------------------------------------------
// Form-field helpers
// ---------------------------------------------------------------------------

#[napi]
pub fn sanitize_currency(raw: String) -> NapiResult<String> {
    let amount = piti_core::sanitize::currency(&raw).map_err(to_napi_error)?;
    Ok(amount.to_string())
}

#[napi]
pub fn default_config() -> NapiResult<String> {
    serde_json::to_string(&piti_core::config::QuoteConfig::default()).map_err(to_napi_error)
}
