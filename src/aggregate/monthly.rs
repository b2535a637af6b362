use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Income and expense sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    /// Calendar month, 1-based.
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Twelve month buckets for one year.
///
/// Every month is materialized, zeroed, so the history chart keeps its
/// fixed x-axis even for years with no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearHistory {
    pub year: i32,
    pub months: Vec<MonthBucket>,
}

impl YearHistory {
    fn zeroed(year: i32) -> Self {
        let months = (1..=12)
            .map(|month| MonthBucket {
                month,
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
            })
            .collect();
        Self { year, months }
    }

    /// Bucket for a 1-based calendar month.
    pub fn month(&self, month: u32) -> Option<&MonthBucket> {
        self.months.get(month.checked_sub(1)? as usize)
    }
}

/// Sum transactions into per-month buckets for each requested year.
///
/// Transactions of an unrecognized kind add to neither sum.
pub fn monthly_history(transactions: &[Transaction], years: &[i32]) -> Vec<YearHistory> {
    years
        .iter()
        .map(|&year| {
            let mut history = YearHistory::zeroed(year);
            for tx in transactions.iter().filter(|tx| tx.date.year() == year) {
                let bucket = &mut history.months[tx.date.month0() as usize];
                match tx.kind {
                    TransactionKind::Income => bucket.income += tx.amount,
                    TransactionKind::Expense => bucket.expense += tx.amount,
                    TransactionKind::Other => {}
                }
            }
            history
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(date: &str, amount: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Decimal::from(amount),
            kind,
            "test",
        )
    }

    #[test]
    fn a_year_with_no_transactions_yields_twelve_zeroed_buckets() {
        let history = monthly_history(&[], &[2023]);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].year, 2023);
        assert_eq!(history[0].months.len(), 12);
        for (i, bucket) in history[0].months.iter().enumerate() {
            assert_eq!(bucket.month, i as u32 + 1);
            assert_eq!(bucket.income, Decimal::ZERO);
            assert_eq!(bucket.expense, Decimal::ZERO);
        }
    }

    #[test]
    fn sums_land_in_the_transaction_month() {
        let transactions = vec![
            tx("2024-03-05", 100, TransactionKind::Income),
            tx("2024-03-20", 40, TransactionKind::Expense),
        ];
        let history = monthly_history(&transactions, &[2024]);

        let march = history[0].month(3).unwrap();
        assert_eq!(march.income, Decimal::from(100));
        assert_eq!(march.expense, Decimal::from(40));
        for bucket in history[0].months.iter().filter(|b| b.month != 3) {
            assert_eq!(bucket.income, Decimal::ZERO);
            assert_eq!(bucket.expense, Decimal::ZERO);
        }
    }

    #[test]
    fn other_years_do_not_leak_into_a_bucket() {
        let transactions = vec![
            tx("2023-03-05", 100, TransactionKind::Income),
            tx("2024-03-05", 7, TransactionKind::Income),
        ];
        let history = monthly_history(&transactions, &[2024]);
        assert_eq!(history[0].month(3).unwrap().income, Decimal::from(7));
    }

    #[test]
    fn monthly_income_is_conserved_across_buckets() {
        let transactions = vec![
            tx("2024-01-10", 10, TransactionKind::Income),
            tx("2024-03-05", 100, TransactionKind::Income),
            tx("2024-03-09", 25, TransactionKind::Income),
            tx("2024-12-31", 1, TransactionKind::Income),
            tx("2024-06-01", 999, TransactionKind::Expense),
        ];
        let history = monthly_history(&transactions, &[2024]);

        let bucketed: Decimal = history[0].months.iter().map(|b| b.income).sum();
        let direct: Decimal = transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Income)
            .map(|tx| tx.amount)
            .sum();
        assert_eq!(bucketed, direct);
    }

    #[test]
    fn unrecognized_kinds_count_toward_neither_sum() {
        let transactions = vec![
            tx("2024-03-05", 100, TransactionKind::Other),
            tx("2024-03-05", 1, TransactionKind::Income),
        ];
        let history = monthly_history(&transactions, &[2024]);
        let march = history[0].month(3).unwrap();
        assert_eq!(march.income, Decimal::from(1));
        assert_eq!(march.expense, Decimal::ZERO);
    }
}
