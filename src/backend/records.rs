//! Wire shapes returned by the backend, and their decoding into validated
//! model records.
//!
//! Decoding happens before any aggregation so a malformed row can never
//! corrupt a bucket sum: rows with unparseable dates or negative amounts
//! are dropped and counted, and unrecognized `type` values are tallied.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryRef, Id, Transaction, TransactionKind};

/// A transaction row as the backend returns it: the date is a string, the
/// `type` column is free text, and category columns arrive embedded when
/// the fetch requested the join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub date: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub user_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Id>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

/// Counts of records dropped or flagged during decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkippedRecords {
    /// Dropped: the date string did not parse.
    pub invalid_date: usize,
    /// Dropped: the amount was negative (sign belongs in `type`).
    pub negative_amount: usize,
    /// Kept, but excluded from every sum: `type` was not a known kind.
    pub unrecognized_kind: usize,
}

impl SkippedRecords {
    /// Records removed from the batch entirely.
    pub fn dropped(&self) -> usize {
        self.invalid_date + self.negative_amount
    }
}

/// Validated transactions plus the accounting for what was dropped.
#[derive(Debug, Clone, Default)]
pub struct DecodedBatch {
    pub transactions: Vec<Transaction>,
    pub skipped: SkippedRecords,
}

/// Parse a backend date: plain `YYYY-MM-DD` or an RFC 3339 timestamp.
pub(crate) fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Validate wire records up front, skipping malformed rows with a count.
pub fn decode_records(records: Vec<TransactionRecord>) -> DecodedBatch {
    let mut batch = DecodedBatch::default();

    for record in records {
        let Some(date) = parse_record_date(&record.date) else {
            tracing::warn!(id = %record.id, date = %record.date, "Skipping transaction with unparseable date");
            batch.skipped.invalid_date += 1;
            continue;
        };
        if record.amount.is_sign_negative() && !record.amount.is_zero() {
            tracing::warn!(id = %record.id, amount = %record.amount, "Skipping transaction with negative amount");
            batch.skipped.negative_amount += 1;
            continue;
        }
        if record.kind == TransactionKind::Other {
            tracing::debug!(id = %record.id, "Unrecognized transaction type; it will count toward no sum");
            batch.skipped.unrecognized_kind += 1;
        }

        batch.transactions.push(Transaction {
            id: record.id,
            date,
            amount: record.amount,
            description: record.description,
            kind: record.kind,
            category_id: record.category_id,
            category: record.category,
        });
    }

    batch
}
