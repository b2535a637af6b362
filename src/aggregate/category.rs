use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryRef, Id, Transaction, TransactionKind};

/// Transactions grouped under one category, with the share of the grand
/// total they represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket {
    /// Raw category reference; `None` groups uncategorized transactions.
    pub category_id: Option<Id>,
    /// Joined category columns, when any grouped transaction carried them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    pub transactions: Vec<Transaction>,
    pub total: Decimal,
    /// `total * 100 / grand_total`; 0 when the grand total is 0.
    pub percentage: Decimal,
}

impl CategoryBucket {
    /// Display label: joined icon and name, or a placeholder when the
    /// category reference did not resolve.
    pub fn label(&self) -> String {
        match &self.category {
            Some(category) => category.label(),
            None => "Uncategorized".to_string(),
        }
    }
}

/// Per-category sums for one transaction kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub kind: TransactionKind,
    /// Sum over every transaction of `kind`, the percentage denominator.
    pub grand_total: Decimal,
    /// Buckets in first-occurrence order, not sorted.
    pub buckets: Vec<CategoryBucket>,
}

/// Group transactions of `kind` by category and compute each group's share
/// of the kind's grand total.
pub fn category_breakdown(transactions: &[Transaction], kind: TransactionKind) -> CategoryBreakdown {
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    let mut index_by_category: HashMap<Option<Id>, usize> = HashMap::new();
    let mut grand_total = Decimal::ZERO;

    for tx in transactions.iter().filter(|tx| tx.kind == kind) {
        grand_total += tx.amount;

        let index = *index_by_category
            .entry(tx.category_id.clone())
            .or_insert_with(|| {
                buckets.push(CategoryBucket {
                    category_id: tx.category_id.clone(),
                    category: None,
                    transactions: Vec::new(),
                    total: Decimal::ZERO,
                    percentage: Decimal::ZERO,
                });
                buckets.len() - 1
            });

        let bucket = &mut buckets[index];
        bucket.total += tx.amount;
        if bucket.category.is_none() {
            bucket.category = tx.category.clone();
        }
        bucket.transactions.push(tx.clone());
    }

    if !grand_total.is_zero() {
        for bucket in &mut buckets {
            bucket.percentage = bucket.total * Decimal::from(100) / grand_total;
        }
    }

    CategoryBreakdown {
        kind,
        grand_total,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(amount: i64, kind: TransactionKind, category_id: Option<&str>) -> Transaction {
        let mut tx = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Decimal::from(amount),
            kind,
            "test",
        );
        if let Some(id) = category_id {
            tx = tx.with_category(
                Id::from_string(id),
                CategoryRef {
                    name: id.to_string(),
                    kind,
                    icon: "🏷️".to_string(),
                },
            );
        }
        tx
    }

    #[test]
    fn a_single_category_owns_the_whole_total() {
        let transactions = vec![
            tx(30, TransactionKind::Expense, Some("c1")),
            tx(70, TransactionKind::Expense, Some("c1")),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown.buckets.len(), 1);
        assert_eq!(breakdown.buckets[0].total, Decimal::from(100));
        assert_eq!(breakdown.buckets[0].percentage, Decimal::from(100));
        assert_eq!(breakdown.buckets[0].transactions.len(), 2);
    }

    #[test]
    fn buckets_keep_first_occurrence_order() {
        let transactions = vec![
            tx(10, TransactionKind::Expense, Some("rent")),
            tx(5, TransactionKind::Expense, Some("food")),
            tx(1, TransactionKind::Expense, Some("rent")),
            tx(50, TransactionKind::Expense, Some("travel")),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        let order: Vec<&str> = breakdown
            .buckets
            .iter()
            .map(|b| b.category_id.as_ref().unwrap().as_str())
            .collect();
        assert_eq!(order, vec!["rent", "food", "travel"]);
    }

    #[test]
    fn category_totals_sum_to_the_grand_total() {
        let transactions = vec![
            tx(10, TransactionKind::Expense, Some("rent")),
            tx(5, TransactionKind::Expense, Some("food")),
            tx(7, TransactionKind::Expense, None),
            tx(999, TransactionKind::Income, Some("salary")),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        let summed: Decimal = breakdown.buckets.iter().map(|b| b.total).sum();
        assert_eq!(summed, breakdown.grand_total);
        assert_eq!(breakdown.grand_total, Decimal::from(22));
    }

    #[test]
    fn zero_grand_total_yields_zero_percentages() {
        let transactions = vec![tx(100, TransactionKind::Income, Some("salary"))];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        assert!(breakdown.buckets.is_empty());
        assert_eq!(breakdown.grand_total, Decimal::ZERO);

        // Zero-amount transactions still group, but percentages stay 0.
        let transactions = vec![tx(0, TransactionKind::Expense, Some("free"))];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        assert_eq!(breakdown.buckets.len(), 1);
        assert_eq!(breakdown.buckets[0].percentage, Decimal::ZERO);
    }

    #[test]
    fn uncategorized_transactions_group_under_a_placeholder() {
        let transactions = vec![
            tx(10, TransactionKind::Expense, None),
            tx(20, TransactionKind::Expense, None),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown.buckets.len(), 1);
        assert_eq!(breakdown.buckets[0].category_id, None);
        assert_eq!(breakdown.buckets[0].label(), "Uncategorized");
        assert_eq!(breakdown.buckets[0].total, Decimal::from(30));
    }

    #[test]
    fn percentages_split_proportionally() {
        let transactions = vec![
            tx(75, TransactionKind::Expense, Some("rent")),
            tx(25, TransactionKind::Expense, Some("food")),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        assert_eq!(breakdown.buckets[0].percentage, Decimal::from(75));
        assert_eq!(breakdown.buckets[1].percentage, Decimal::from(25));
    }
}
