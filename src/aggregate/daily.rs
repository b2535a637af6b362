use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Income and expense sums for one day of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    /// Day of month, 1-based.
    pub day: u32,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Day buckets for one month, sized to that month's exact day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthDays {
    /// Calendar month, 1-based.
    pub month: u32,
    pub days: Vec<DayBucket>,
}

/// Per-day history for one year.
///
/// Unlike the monthly aggregation, only months with at least one
/// transaction are materialized; callers treat an absent month as all-zero
/// and render an empty chart for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearDays {
    pub year: i32,
    pub months: Vec<MonthDays>,
}

impl YearDays {
    /// Buckets for a 1-based calendar month, if it was materialized.
    pub fn month(&self, month: u32) -> Option<&MonthDays> {
        self.months.iter().find(|m| m.month == month)
    }
}

/// Number of days in a calendar month: the day before the first of the
/// following month, so leap years fall out of the calendar arithmetic.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid date");
    first_next.pred_opt().expect("valid date").day()
}

/// Sum transactions into per-day buckets for each month of each requested
/// year that has any transactions.
pub fn daily_history(transactions: &[Transaction], years: &[i32]) -> Vec<YearDays> {
    years
        .iter()
        .map(|&year| {
            let mut months: Vec<u32> = transactions
                .iter()
                .filter(|tx| tx.date.year() == year)
                .map(|tx| tx.date.month())
                .collect();
            months.sort_unstable();
            months.dedup();

            let months = months
                .into_iter()
                .map(|month| {
                    let mut days: Vec<DayBucket> = (1..=days_in_month(year, month))
                        .map(|day| DayBucket {
                            day,
                            income: Decimal::ZERO,
                            expense: Decimal::ZERO,
                        })
                        .collect();

                    for tx in transactions
                        .iter()
                        .filter(|tx| tx.date.year() == year && tx.date.month() == month)
                    {
                        let bucket = &mut days[tx.date.day0() as usize];
                        match tx.kind {
                            TransactionKind::Income => bucket.income += tx.amount,
                            TransactionKind::Expense => bucket.expense += tx.amount,
                            TransactionKind::Other => {}
                        }
                    }

                    MonthDays { month, days }
                })
                .collect();

            YearDays { year, months }
        })
        .collect()
}
