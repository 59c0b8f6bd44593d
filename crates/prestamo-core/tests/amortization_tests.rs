use prestamo_core::amortization::schedule::{self, LoanInput};
use prestamo_core::annuity;
use prestamo_core::types::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixed payment tests
// ===========================================================================

#[test]
fn test_payment_zero_rate_exact_division() {
    // 1000 over 10 periods at 0% => exactly 100 per period
    let payment = annuity::fixed_payment(dec!(1000), dec!(0), 10).unwrap();
    assert_eq!(payment, dec!(100));
}

#[test]
fn test_payment_typical_consumer_loan() {
    // 10,000 at 2% monthly over 12 months => ~945.60
    let payment = annuity::fixed_payment(dec!(10000), dec!(0.02), 12).unwrap();
    assert!((payment - dec!(945.60)).abs() < dec!(0.01));
}

#[test]
fn test_payment_mortgage_scale() {
    // 250,000 at 0.5% monthly over 30 years => ~1,498.88
    let payment = annuity::fixed_payment(dec!(250000), dec!(0.005), 360).unwrap();
    assert!((payment - dec!(1498.88)).abs() < dec!(0.01));
}

#[test]
fn test_payment_invalid_inputs() {
    assert!(annuity::fixed_payment(dec!(1000), dec!(0.02), 0).is_err());
    assert!(annuity::fixed_payment(dec!(-1000), dec!(0.02), 12).is_err());
    assert!(annuity::fixed_payment(dec!(1000), dec!(-0.02), 12).is_err());
}

// ===========================================================================
// Schedule tests
// ===========================================================================

#[test]
fn test_schedule_zero_rate_end_to_end() {
    let input = LoanInput {
        principal: dec!(1000),
        periodic_rate: dec!(0),
        periods: 10,
        payment: None,
    };
    let summary = schedule::amortize(&input).unwrap().result;

    assert_eq!(summary.payment, dec!(100));
    assert_eq!(summary.rows.len(), 10);
    assert!(summary.rows.iter().all(|r| r.interest == Decimal::ZERO));
    assert_eq!(summary.rows.last().unwrap().balance, Decimal::ZERO);
    assert_eq!(summary.total_paid, dec!(1000));
    assert_eq!(summary.total_interest, Decimal::ZERO);
}

#[test]
fn test_schedule_periods_are_one_based_and_complete() {
    let input = LoanInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        periods: 12,
        payment: None,
    };
    let summary = schedule::amortize(&input).unwrap().result;

    assert_eq!(summary.rows.len(), 12);
    for (i, row) in summary.rows.iter().enumerate() {
        assert_eq!(row.period, (i + 1) as u32);
    }
}

#[test]
fn test_schedule_closes_at_exactly_zero_over_long_term() {
    let input = LoanInput {
        principal: dec!(250000),
        periodic_rate: dec!(0.005),
        periods: 360,
        payment: None,
    };
    let summary = schedule::amortize(&input).unwrap().result;

    assert_eq!(summary.rows.len(), 360);
    assert_eq!(summary.rows.last().unwrap().balance, Decimal::ZERO);

    // Balance declines monotonically over the whole term
    let mut previous = dec!(250000);
    for row in &summary.rows {
        assert!(row.balance <= previous);
        assert!(row.balance >= Decimal::ZERO);
        previous = row.balance;
    }
}

#[test]
fn test_schedule_principal_telescopes_to_original() {
    let input = LoanInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        periods: 12,
        payment: None,
    };
    let summary = schedule::amortize(&input).unwrap().result;

    // Last-digit Decimal rounding only; see the unit tests for the bound
    let eps = dec!(0.000000000000000001);
    let principal_sum: Money = summary.rows.iter().map(|r| r.principal).sum();
    assert!((principal_sum - dec!(10000)).abs() < eps);
    assert!((summary.total_paid - Decimal::from(12) * summary.payment).abs() < eps);
}

#[test]
fn test_build_rows_decoupled_from_payment_source() {
    // Same rows whether the caller precomputes the installment or lets
    // amortize resolve it.
    let payment = annuity::fixed_payment(dec!(10000), dec!(0.02), 12).unwrap();
    let rows = schedule::build_rows(dec!(10000), dec!(0.02), 12, payment).unwrap();

    let input = LoanInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        periods: 12,
        payment: None,
    };
    let summary = schedule::amortize(&input).unwrap().result;

    assert_eq!(rows, summary.rows);
}

#[test]
fn test_build_rows_arbitrary_installment_is_accepted() {
    // A deliberately low installment: early periods amortise little, the
    // final period's closure absorbs a large residual. Accepted behaviour.
    let rows = schedule::build_rows(dec!(10000), dec!(0.02), 12, dec!(300)).unwrap();

    assert_eq!(rows.len(), 12);
    assert_eq!(rows.last().unwrap().balance, Decimal::ZERO);
    assert!(rows.last().unwrap().principal > dec!(300));
}

#[test]
fn test_schedule_override_emits_warning() {
    let input = LoanInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        periods: 12,
        payment: Some(dec!(1000)),
    };
    let output = schedule::amortize(&input).unwrap();

    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.result.payment, dec!(1000));
    assert_eq!(output.result.rows.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn test_schedule_deterministic_across_invocations() {
    let input = LoanInput {
        principal: dec!(73500.50),
        periodic_rate: dec!(0.0135),
        periods: 48,
        payment: None,
    };
    let a = schedule::amortize(&input).unwrap().result;
    let b = schedule::amortize(&input).unwrap().result;
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.total_paid, b.total_paid);
    assert_eq!(a.total_interest, b.total_interest);
}

#[test]
fn test_schedule_invalid_inputs() {
    let mut input = LoanInput {
        principal: dec!(10000),
        periodic_rate: dec!(0.02),
        periods: 0,
        payment: None,
    };
    assert!(schedule::amortize(&input).is_err());

    input.periods = 12;
    input.principal = Decimal::ZERO;
    assert!(schedule::amortize(&input).is_err());

    input.principal = dec!(10000);
    input.periodic_rate = dec!(-0.01);
    assert!(schedule::amortize(&input).is_err());
}
