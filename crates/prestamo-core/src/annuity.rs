use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::PrestamoError;
use crate::types::{Money, Rate};
use crate::PrestamoResult;

/// Fixed per-period installment for a fully amortising loan.
///
/// Standard annuity formula: P · r · (1+r)^n / ((1+r)^n − 1). A zero rate
/// degenerates to straight-line repayment, P / n.
pub fn fixed_payment(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
) -> PrestamoResult<Money> {
    validate_loan(principal, periodic_rate, periods)?;

    if periodic_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let one_plus_r = Decimal::ONE + periodic_rate;
    let factor = one_plus_r.powd(Decimal::from(periods));
    let annuity_factor = factor - Decimal::ONE;

    if annuity_factor.is_zero() {
        return Err(PrestamoError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * periodic_rate * factor / annuity_factor)
}

/// Range checks shared by the payment and schedule operations.
pub(crate) fn validate_loan(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
) -> PrestamoResult<()> {
    if periods == 0 {
        return Err(PrestamoError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }
    if principal <= Decimal::ZERO {
        return Err(PrestamoError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if periodic_rate < Decimal::ZERO {
        return Err(PrestamoError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "Periodic rate must be non-negative".into(),
        });
    }
    Ok(())
}
