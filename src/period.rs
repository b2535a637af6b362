use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// How the history chart groups its bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Days within the selected month.
    Month,
    /// Months across the selected year.
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }
}

/// The selected chart period.
///
/// `month` is a zero-based index (0 = January), matching the month selector
/// it is bound to; bucket shapes downstream use 1-based calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// 1-based calendar month for bucket lookups.
    pub fn calendar_month(&self) -> u32 {
        self.month + 1
    }
}

/// Selector state feeding the aggregators.
///
/// A persistent control with no terminal state: every transition keeps the
/// rest of the state intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelector {
    pub timeframe: Timeframe,
    pub period: Period,
}

impl PeriodSelector {
    /// Initial state: month view over the clock's current month and year.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            timeframe: Timeframe::Month,
            period: Period {
                month: clock.current_month_index(),
                year: clock.current_year(),
            },
        }
    }

    /// Selecting a year keeps the chosen month.
    pub fn select_year(&mut self, year: i32) {
        self.period.year = year;
    }

    /// Selecting a month keeps the chosen year. Indexes past December are
    /// clamped.
    pub fn select_month(&mut self, month: u32) {
        self.period.month = month.min(11);
    }

    /// Switching the grouping never resets the period.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }
}
