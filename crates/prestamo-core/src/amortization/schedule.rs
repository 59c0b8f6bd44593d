use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::error::PrestamoError;
use crate::types::*;
use crate::PrestamoResult;

/// Loan request for a fixed-installment amortisation schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub periodic_rate: Rate,
    pub periods: u32,
    /// Caller-supplied installment (own rounding policy). When absent the
    /// annuity payment is computed and used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Money>,
}

/// A single period in the amortisation schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
}

/// Full schedule with aggregate totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub payment: Money,
    pub rows: Vec<ScheduleRow>,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Build the period-by-period breakdown for a precomputed installment.
///
/// One pass from period 1 to `periods`, splitting each installment into
/// interest on the running balance and principal amortised. The final
/// period's principal portion is forced to the exact remaining balance so
/// the loan closes at precisely zero rather than carrying a residual from
/// repeated subtraction. An installment that did not come from
/// [`annuity::fixed_payment`] is accepted as-is; the closure step then
/// absorbs whatever residual that installment leaves.
pub fn build_rows(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
    payment: Money,
) -> PrestamoResult<Vec<ScheduleRow>> {
    annuity::validate_loan(principal, periodic_rate, periods)?;

    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = principal;

    for period in 1..=periods {
        let interest = balance * periodic_rate;

        let amortised = if period == periods {
            // Closure: repay the exact remaining balance
            balance
        } else {
            payment - interest
        };

        // Floor at zero; the balance must never go negative, even transiently
        balance = (balance - amortised).max(Decimal::ZERO);

        rows.push(ScheduleRow {
            period,
            payment,
            interest,
            principal: amortised,
            balance,
        });
    }

    Ok(rows)
}

/// Compute the installment, build the full schedule, and reduce the totals.
pub fn amortize(input: &LoanInput) -> PrestamoResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let annuity_payment =
        annuity::fixed_payment(input.principal, input.periodic_rate, input.periods)?;

    let payment = match input.payment {
        Some(p) if p <= Decimal::ZERO => {
            return Err(PrestamoError::InvalidInput {
                field: "payment".into(),
                reason: "Installment override must be positive".into(),
            });
        }
        Some(p) => {
            if p != annuity_payment {
                warnings.push(format!(
                    "Installment override {p} differs from annuity payment \
                     {annuity_payment}; the final period absorbs the residual"
                ));
            }
            p
        }
        None => annuity_payment,
    };

    let rows = build_rows(input.principal, input.periodic_rate, input.periods, payment)?;

    let total_paid: Money = rows.iter().map(|r| r.payment).sum();
    let total_interest: Money = rows.iter().map(|r| r.interest).sum();

    let output = LoanSummary {
        payment,
        rows,
        total_paid,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "French Amortisation (fixed installment)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "periodic_rate": input.periodic_rate.to_string(),
            "periods": input.periods,
        }),
        warnings,
        elapsed,
        output,
    ))
}
