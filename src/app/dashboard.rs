use anyhow::Result;
use chrono::{Datelike, Months, NaiveDate};

use crate::aggregate::{
    category_breakdown, daily_history, known_years, monthly_history, overview, CategoryBreakdown,
};
use crate::backend::{decode_records, TransactionSource};
use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::format::format_amount_display;
use crate::history::{chart_rows, HistoryPoint};
use crate::models::TransactionKind;
use crate::period::PeriodSelector;
use crate::session::Session;

use super::types::{
    CategoryBreakdownOutput, CategoryEntryOutput, DashboardOutput, HistoryOutput,
    HistoryPointOutput, OverviewOutput,
};

/// Inputs for one dashboard computation.
#[derive(Debug, Clone, Copy)]
pub struct DashboardRequest {
    /// Inclusive start of the overview/category scope.
    pub from: NaiveDate,
    /// Inclusive end of the overview/category scope.
    pub to: NaiveDate,
    pub selector: PeriodSelector,
}

impl DashboardRequest {
    /// Default scope: start of the clock's current month through one month
    /// from today, with the selector in its initial state.
    pub fn current_month(clock: &dyn Clock) -> Self {
        let today = clock.today();
        let from = today.with_day(1).expect("valid date");
        let to = today
            .checked_add_months(Months::new(1))
            .expect("valid date");
        Self {
            from,
            to,
            selector: PeriodSelector::new(clock),
        }
    }
}

/// Fetch, decode, aggregate, and shape the full dashboard payload.
///
/// The scoped and all-time fetches run concurrently and feed independent
/// aggregations; their results are never merged. Everything is recomputed
/// from scratch per call. The caller owns any displayed state, so a
/// recompute that lands late simply replaces the previous payload; no
/// request fencing happens here.
pub async fn dashboard_report(
    source: &dyn TransactionSource,
    session: &Session,
    clock: &dyn Clock,
    display: &DisplayConfig,
    request: &DashboardRequest,
) -> Result<DashboardOutput> {
    let (scoped, all_time) = tokio::join!(
        source.transactions_in_range(session, request.from, request.to),
        source.transactions_all(session),
    );
    let scoped = decode_records(scoped?);
    let all_time = decode_records(all_time?);

    if scoped.skipped.dropped() > 0 || all_time.skipped.dropped() > 0 {
        tracing::warn!(
            scoped = scoped.skipped.dropped(),
            all_time = all_time.skipped.dropped(),
            "Dropped malformed transaction records"
        );
    }

    let years = known_years(&all_time.transactions, clock);
    let monthly = monthly_history(&all_time.transactions, &years);
    let daily = daily_history(&all_time.transactions, &years);
    let points = chart_rows(&request.selector, &monthly, &daily);

    let totals = overview(&scoped.transactions);

    Ok(DashboardOutput {
        overview: OverviewOutput {
            from: request.from.to_string(),
            to: request.to.to_string(),
            currency: display.currency.clone(),
            income: format_display(totals.income, display),
            expense: format_display(totals.expense, display),
            balance: format_display(totals.balance, display),
            transaction_count: scoped.transactions.len(),
        },
        income_by_category: breakdown_output(
            category_breakdown(&scoped.transactions, TransactionKind::Income),
            display,
        ),
        expense_by_category: breakdown_output(
            category_breakdown(&scoped.transactions, TransactionKind::Expense),
            display,
        ),
        history: history_output(&request.selector, points, display),
        years,
        skipped_scoped: scoped.skipped,
        skipped_all_time: all_time.skipped,
    })
}

/// Category breakdown alone, for the categories view.
pub async fn categories_report(
    source: &dyn TransactionSource,
    session: &Session,
    display: &DisplayConfig,
    from: NaiveDate,
    to: NaiveDate,
    kind: TransactionKind,
) -> Result<CategoryBreakdownOutput> {
    let records = source.transactions_in_range(session, from, to).await?;
    let batch = decode_records(records);
    Ok(breakdown_output(
        category_breakdown(&batch.transactions, kind),
        display,
    ))
}

/// History chart alone, for the history view.
pub async fn history_report(
    source: &dyn TransactionSource,
    session: &Session,
    clock: &dyn Clock,
    display: &DisplayConfig,
    selector: &PeriodSelector,
) -> Result<HistoryOutput> {
    let records = source.transactions_all(session).await?;
    let batch = decode_records(records);

    let years = known_years(&batch.transactions, clock);
    let monthly = monthly_history(&batch.transactions, &years);
    let daily = daily_history(&batch.transactions, &years);

    Ok(history_output(
        selector,
        chart_rows(selector, &monthly, &daily),
        display,
    ))
}

fn format_display(value: rust_decimal::Decimal, display: &DisplayConfig) -> String {
    format_amount_display(value, &display.currency, display.currency_grouping)
}

fn breakdown_output(
    breakdown: CategoryBreakdown,
    display: &DisplayConfig,
) -> CategoryBreakdownOutput {
    let entries = breakdown
        .buckets
        .iter()
        .map(|bucket| CategoryEntryOutput {
            category_id: bucket.category_id.as_ref().map(|id| id.to_string()),
            label: bucket.label(),
            total: format_display(bucket.total, display),
            percentage: bucket.percentage.round_dp(2).normalize().to_string(),
            transaction_count: bucket.transactions.len(),
        })
        .collect();

    CategoryBreakdownOutput {
        kind: breakdown.kind.as_str().to_string(),
        grand_total: format_display(breakdown.grand_total, display),
        entries,
    }
}

fn history_output(
    selector: &PeriodSelector,
    points: Vec<HistoryPoint>,
    display: &DisplayConfig,
) -> HistoryOutput {
    HistoryOutput {
        timeframe: selector.timeframe.as_str().to_string(),
        year: selector.period.year,
        month: selector.period.calendar_month(),
        points: points
            .into_iter()
            .map(|point| HistoryPointOutput {
                label: point.label,
                income: format_display(point.income, display),
                expense: format_display(point.expense, display),
            })
            .collect(),
    }
}
