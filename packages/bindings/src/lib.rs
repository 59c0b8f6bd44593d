use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Serialize;

use prestamo_core::amortization::schedule::{self, LoanInput};
use prestamo_core::annuity;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[derive(Serialize)]
struct PaymentResponse {
    payment: Decimal,
}

/// Fixed per-period installment for a `LoanInput`-shaped JSON request.
/// Any `payment` field in the request is ignored.
#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = annuity::fixed_payment(input.principal, input.periodic_rate, input.periods)
        .map_err(to_napi_error)?;
    serde_json::to_string(&PaymentResponse { payment }).map_err(to_napi_error)
}

/// Full amortisation schedule envelope for a `LoanInput`-shaped JSON request.
#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = schedule::amortize(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
