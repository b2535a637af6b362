//! Chart-row selection for the history card.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{YearDays, YearHistory};
use crate::period::{PeriodSelector, Timeframe};

/// One bar group of the history chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPoint {
    /// Axis label: a zero-padded day of month, or a month name.
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rows for the currently selected period.
///
/// A year or month with no aggregated data yields an empty row set; the
/// chart renders its "no data" state instead of failing.
pub fn chart_rows(
    selector: &PeriodSelector,
    monthly: &[YearHistory],
    daily: &[YearDays],
) -> Vec<HistoryPoint> {
    match selector.timeframe {
        Timeframe::Year => monthly
            .iter()
            .find(|year| year.year == selector.period.year)
            .map(|year| {
                year.months
                    .iter()
                    .map(|bucket| HistoryPoint {
                        label: MONTH_NAMES[(bucket.month - 1) as usize].to_string(),
                        income: bucket.income,
                        expense: bucket.expense,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Timeframe::Month => daily
            .iter()
            .find(|year| year.year == selector.period.year)
            .and_then(|year| year.month(selector.period.calendar_month()))
            .map(|month| {
                month
                    .days
                    .iter()
                    .map(|bucket| HistoryPoint {
                        label: format!("{:02}", bucket.day),
                        income: bucket.income,
                        expense: bucket.expense,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}
