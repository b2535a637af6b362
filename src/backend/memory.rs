// src/backend/memory.rs
//! In-memory transaction source for tests.

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::models::{Category, Id, TransactionKind};
use crate::session::Session;

use super::records::parse_record_date;
use super::{NewCategory, NewTransaction, TransactionRecord, TransactionSource};

/// Deterministic in-process source: rows are returned as seeded, keyed by
/// user, with the same range semantics the real backend applies.
pub struct MemorySource {
    transactions: Mutex<HashMap<Id, Vec<TransactionRecord>>>,
    categories: Mutex<HashMap<Id, Vec<Category>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            transactions: Mutex::new(HashMap::new()),
            categories: Mutex::new(HashMap::new()),
        }
    }

    pub async fn seed_transactions(&self, user_id: &Id, records: Vec<TransactionRecord>) {
        let mut transactions = self.transactions.lock().await;
        transactions.entry(user_id.clone()).or_default().extend(records);
    }

    pub async fn seed_categories(&self, user_id: &Id, rows: Vec<Category>) {
        let mut categories = self.categories.lock().await;
        categories.entry(user_id.clone()).or_default().extend(rows);
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TransactionSource for MemorySource {
    async fn transactions_in_range(
        &self,
        session: &Session,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        let transactions = self.transactions.lock().await;
        let rows = transactions
            .get(session.user_id())
            .map(|rows| {
                rows.iter()
                    // The backend filters on a typed date column, so rows
                    // whose date never parsed match no range.
                    .filter(|row| {
                        parse_record_date(&row.date)
                            .map(|date| date >= from && date <= to)
                            .unwrap_or(false)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn transactions_all(&self, session: &Session) -> Result<Vec<TransactionRecord>> {
        let transactions = self.transactions.lock().await;
        Ok(transactions.get(session.user_id()).cloned().unwrap_or_default())
    }

    async fn categories(
        &self,
        session: &Session,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Category>> {
        let categories = self.categories.lock().await;
        let rows = categories
            .get(session.user_id())
            .map(|rows| {
                rows.iter()
                    .filter(|row| kind.map(|k| row.kind == k).unwrap_or(true))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn create_transaction(
        &self,
        session: &Session,
        draft: &NewTransaction,
    ) -> Result<TransactionRecord> {
        draft.validate()?;
        let amount = Decimal::from_str(draft.amount.trim())
            .with_context(|| format!("Invalid draft amount: {}", draft.amount))?;

        let record = TransactionRecord {
            id: Id::new(),
            created_at: Some(Utc::now()),
            date: draft.date.to_string(),
            amount,
            description: draft.description.clone(),
            user_id: draft.user_id.clone(),
            category_id: draft.category_id.clone(),
            kind: draft.kind,
            category: None,
        };

        let mut transactions = self.transactions.lock().await;
        transactions
            .entry(session.user_id().clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn create_category(&self, session: &Session, draft: &NewCategory) -> Result<Category> {
        draft.validate()?;

        let category = Category {
            id: Id::new(),
            user_id: draft.user_id.clone(),
            name: draft.name.clone(),
            icon: draft.icon.clone(),
            kind: draft.kind,
            created_at: Utc::now(),
        };

        let mut categories = self.categories.lock().await;
        categories
            .entry(session.user_id().clone())
            .or_default()
            .push(category.clone());
        Ok(category)
    }
}
