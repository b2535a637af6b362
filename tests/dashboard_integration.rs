use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tallyboard::app::{categories_report, dashboard_report, DashboardRequest};
use tallyboard::backend::{MemorySource, TransactionRecord};
use tallyboard::clock::FixedClock;
use tallyboard::config::DisplayConfig;
use tallyboard::models::{CategoryRef, Id, TransactionKind};
use tallyboard::period::{Period, PeriodSelector, Timeframe};
use tallyboard::session::Session;

fn record(
    id: &str,
    date: &str,
    amount: i64,
    kind: &str,
    category: Option<(&str, &str, &str)>,
) -> TransactionRecord {
    let kind = TransactionKind::from_wire(kind);
    TransactionRecord {
        id: Id::from_string(id),
        created_at: None,
        date: date.to_string(),
        amount: Decimal::from(amount),
        description: id.to_string(),
        user_id: Id::from_string("user-1"),
        category_id: category.map(|(id, _, _)| Id::from_string(id)),
        kind,
        category: category.map(|(_, name, icon)| CategoryRef {
            name: name.to_string(),
            kind,
            icon: icon.to_string(),
        }),
    }
}

async fn seeded_source() -> MemorySource {
    let source = MemorySource::new();
    source
        .seed_transactions(
            &Id::from_string("user-1"),
            vec![
                record("salary", "2024-03-05", 100, "income", Some(("c-salary", "Salary", "💰"))),
                record(
                    "groceries",
                    "2024-03-20",
                    40,
                    "expense",
                    Some(("c-food", "Groceries", "🛒")),
                ),
                record("mystery", "2024-03-22", 10, "expense", None),
                record("broken", "03/25/2024", 5, "expense", None),
                record("bonus", "2023-12-31", 10, "income", Some(("c-salary", "Salary", "💰"))),
            ],
        )
        .await;
    source
}

fn march_2024_request() -> DashboardRequest {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
    DashboardRequest::current_month(&clock)
}

#[tokio::test]
async fn dashboard_report_shapes_the_full_payload() -> Result<()> {
    let source = seeded_source().await;
    let session = Session::new(Id::from_string("user-1"), "token");
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
    let display = DisplayConfig::default();

    let output =
        dashboard_report(&source, &session, &clock, &display, &march_2024_request()).await?;

    // Overview spans the scoped fetch only.
    assert_eq!(output.overview.from, "2024-03-01");
    assert_eq!(output.overview.income, "$100.00");
    assert_eq!(output.overview.expense, "$50.00");
    assert_eq!(output.overview.balance, "$50.00");
    assert_eq!(output.overview.transaction_count, 3);

    // Category entries keep first-occurrence order and carry placeholders
    // for unresolved joins.
    let expense = &output.expense_by_category;
    assert_eq!(expense.grand_total, "$50.00");
    assert_eq!(expense.entries.len(), 2);
    assert_eq!(expense.entries[0].label, "🛒 Groceries");
    assert_eq!(expense.entries[0].percentage, "80");
    assert_eq!(expense.entries[1].label, "Uncategorized");
    assert_eq!(expense.entries[1].percentage, "20");

    let income = &output.income_by_category;
    assert_eq!(income.entries.len(), 1);
    assert_eq!(income.entries[0].percentage, "100");

    // History defaults to the month view over March 2024.
    assert_eq!(output.history.timeframe, "month");
    assert_eq!(output.history.month, 3);
    assert_eq!(output.history.points.len(), 31);
    assert_eq!(output.history.points[4].label, "05");
    assert_eq!(output.history.points[4].income, "$100.00");
    assert_eq!(output.history.points[19].expense, "$40.00");
    assert_eq!(output.history.points[0].income, "$0.00");

    // The year selector sees every transaction year plus the current one.
    assert_eq!(output.years, vec![2023, 2024]);

    // The malformed row is only visible to the all-time fetch (the scoped
    // fetch filters on a typed date column), and is dropped with a count.
    assert_eq!(output.skipped_scoped.invalid_date, 0);
    assert_eq!(output.skipped_all_time.invalid_date, 1);

    Ok(())
}

#[tokio::test]
async fn month_without_data_renders_an_empty_chart() -> Result<()> {
    let source = seeded_source().await;
    let session = Session::new(Id::from_string("user-1"), "token");
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
    let display = DisplayConfig::default();

    let mut request = march_2024_request();
    request.selector = PeriodSelector {
        timeframe: Timeframe::Month,
        period: Period { month: 0, year: 2024 },
    };

    let output = dashboard_report(&source, &session, &clock, &display, &request).await?;
    assert!(output.history.points.is_empty());

    Ok(())
}

#[tokio::test]
async fn year_timeframe_charts_all_twelve_months() -> Result<()> {
    let source = seeded_source().await;
    let session = Session::new(Id::from_string("user-1"), "token");
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
    let display = DisplayConfig::default();

    let mut request = march_2024_request();
    request.selector = PeriodSelector {
        timeframe: Timeframe::Year,
        period: Period { month: 2, year: 2023 },
    };

    let output = dashboard_report(&source, &session, &clock, &display, &request).await?;
    assert_eq!(output.history.timeframe, "year");
    assert_eq!(output.history.points.len(), 12);
    assert_eq!(output.history.points[11].label, "December");
    assert_eq!(output.history.points[11].income, "$10.00");
    assert_eq!(output.history.points[0].income, "$0.00");

    Ok(())
}

#[tokio::test]
async fn categories_report_with_no_matching_kind_is_empty_not_nan() -> Result<()> {
    let source = MemorySource::new();
    source
        .seed_transactions(
            &Id::from_string("user-1"),
            vec![record("groceries", "2024-03-20", 40, "expense", None)],
        )
        .await;
    let session = Session::new(Id::from_string("user-1"), "token");
    let display = DisplayConfig::default();

    let output = categories_report(
        &source,
        &session,
        &display,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        TransactionKind::Income,
    )
    .await?;

    assert_eq!(output.grand_total, "$0.00");
    assert!(output.entries.is_empty());

    Ok(())
}
