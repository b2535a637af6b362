use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Income, expense, and net balance over one fetched scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewTotals {
    pub income: Decimal,
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

pub fn overview(transactions: &[Transaction]) -> OverviewTotals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
            TransactionKind::Other => {}
        }
    }
    OverviewTotals {
        income,
        expense,
        balance: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(amount: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Decimal::from(amount),
            kind,
            "test",
        )
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let totals = overview(&[
            tx(100, TransactionKind::Income),
            tx(30, TransactionKind::Expense),
            tx(10, TransactionKind::Expense),
        ]);
        assert_eq!(totals.income, Decimal::from(100));
        assert_eq!(totals.expense, Decimal::from(40));
        assert_eq!(totals.balance, Decimal::from(60));
    }

    #[test]
    fn empty_input_is_all_zero() {
        let totals = overview(&[]);
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.expense, Decimal::ZERO);
        assert_eq!(totals.balance, Decimal::ZERO);
    }

    #[test]
    fn unrecognized_kinds_are_excluded() {
        let totals = overview(&[tx(50, TransactionKind::Other), tx(5, TransactionKind::Income)]);
        assert_eq!(totals.income, Decimal::from(5));
        assert_eq!(totals.balance, Decimal::from(5));
    }
}
