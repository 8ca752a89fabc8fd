use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::InvalidInputError;

/// Days between two consecutive installments unless configured otherwise.
pub const DEFAULT_INSTALLMENT_INTERVAL_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    Pending,
}

/// One scheduled payment of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based position in the plan.
    pub number: u32,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: InstallmentStatus,
}

/// Split `total` into `count` payments spaced `interval_days` apart.
///
/// Every payment but the last is the even share truncated to the cent; the
/// last one carries the remainder so the plan always sums to the total
/// rounded to cents.
pub fn installment_plan(
    total: Decimal,
    count: u32,
    first_due: NaiveDate,
    interval_days: u32,
) -> Result<Vec<Installment>, InvalidInputError> {
    if count == 0 {
        return Err(InvalidInputError::new("installments", "must be at least 1"));
    }
    if total < Decimal::ZERO {
        return Err(InvalidInputError::new("total", "must not be negative"));
    }

    let total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let share = (total / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let last = total - share * Decimal::from(count - 1);

    (0..count)
        .map(|index| {
            let offset = u64::from(index) * u64::from(interval_days);
            let due_date = first_due
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| InvalidInputError::new("installments", "due date out of range"))?;
            Ok(Installment {
                number: index + 1,
                amount: if index + 1 == count { last } else { share },
                due_date,
                status: InstallmentStatus::Pending,
            })
        })
        .collect()
}
