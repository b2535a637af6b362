use serde::Serialize;

use crate::backend::SkippedRecords;

/// JSON output for the overview stat cards.
#[derive(Serialize)]
pub struct OverviewOutput {
    pub from: String,
    pub to: String,
    pub currency: String,
    pub income: String,
    pub expense: String,
    pub balance: String,
    pub transaction_count: usize,
}

/// JSON output for one category row.
#[derive(Serialize)]
pub struct CategoryEntryOutput {
    pub category_id: Option<String>,
    pub label: String,
    pub total: String,
    /// Rounded to two decimal places, as the progress rows render it.
    pub percentage: String,
    pub transaction_count: usize,
}

/// JSON output for one kind's category breakdown.
#[derive(Serialize)]
pub struct CategoryBreakdownOutput {
    pub kind: String,
    pub grand_total: String,
    pub entries: Vec<CategoryEntryOutput>,
}

/// JSON output for one history chart row.
#[derive(Serialize)]
pub struct HistoryPointOutput {
    pub label: String,
    pub income: String,
    pub expense: String,
}

/// JSON output for the history chart.
#[derive(Serialize)]
pub struct HistoryOutput {
    pub timeframe: String,
    pub year: i32,
    /// 1-based calendar month; meaningful in the month timeframe.
    pub month: u32,
    /// Empty when the selected period has no data.
    pub points: Vec<HistoryPointOutput>,
}

/// Complete dashboard payload.
#[derive(Serialize)]
pub struct DashboardOutput {
    pub overview: OverviewOutput,
    pub income_by_category: CategoryBreakdownOutput,
    pub expense_by_category: CategoryBreakdownOutput,
    pub history: HistoryOutput,
    /// Years offered by the year selector.
    pub years: Vec<i32>,
    pub skipped_scoped: SkippedRecords,
    pub skipped_all_time: SkippedRecords,
}
