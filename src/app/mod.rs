mod dashboard;
mod types;

pub use dashboard::{categories_report, dashboard_report, history_report, DashboardRequest};
pub use types::{
    CategoryBreakdownOutput, CategoryEntryOutput, DashboardOutput, HistoryOutput,
    HistoryPointOutput, OverviewOutput,
};
