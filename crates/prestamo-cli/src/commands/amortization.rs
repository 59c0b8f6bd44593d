use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use prestamo_core::amortization::schedule::{self, LoanInput};
use prestamo_core::annuity;

use crate::input;

/// Arguments for the fixed-installment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Periodic interest rate as a fraction (0.02 = 2% per period)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Number of payment periods
    #[arg(long)]
    pub periods: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the full amortisation schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Periodic interest rate as a fraction (0.02 = 2% per period)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Number of payment periods
    #[arg(long)]
    pub periods: Option<u32>,

    /// Installment override; omit to use the annuity payment
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            periodic_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            periods: args
                .periods
                .ok_or("--periods is required (or provide --input)")?,
            payment: None,
        }
    };

    let payment = annuity::fixed_payment(loan.principal, loan.periodic_rate, loan.periods)?;
    Ok(serde_json::json!({ "payment": payment }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            periodic_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            periods: args
                .periods
                .ok_or("--periods is required (or provide --input)")?,
            payment: args.payment,
        }
    };

    let result = schedule::amortize(&loan)?;
    Ok(serde_json::to_value(result)?)
}
