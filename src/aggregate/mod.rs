//! Pure reductions over already-fetched transactions.
//!
//! Everything here recomputes from scratch on each call; there is no
//! incremental maintenance and no hidden state. Inputs are never mutated.

mod category;
mod daily;
mod monthly;
mod overview;

pub use category::{category_breakdown, CategoryBreakdown, CategoryBucket};
pub use daily::{daily_history, days_in_month, DayBucket, MonthDays, YearDays};
pub use monthly::{monthly_history, MonthBucket, YearHistory};
pub use overview::{overview, OverviewTotals};

use chrono::Datelike;

use crate::clock::Clock;
use crate::models::Transaction;

/// Distinct transaction years, ascending, always including the clock's
/// current year. The year selector never offers an empty list.
pub fn known_years(transactions: &[Transaction], clock: &dyn Clock) -> Vec<i32> {
    let mut years: Vec<i32> = transactions.iter().map(|tx| tx.date.year()).collect();
    years.push(clock.current_year());
    years.sort_unstable();
    years.dedup();
    years
}
