mod draft;
mod memory;
mod records;
mod rest;

pub use draft::{DraftError, NewCategory, NewTransaction};
pub use memory::MemorySource;
pub use records::{decode_records, DecodedBatch, SkippedRecords, TransactionRecord};
pub use rest::RestBackend;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{Category, TransactionKind};
use crate::session::Session;

/// Async source of a user's transaction and category data.
///
/// Implementations own transport and persistence; callers never assume any
/// ordering of the returned rows.
#[async_trait::async_trait]
pub trait TransactionSource: Send + Sync {
    /// Transactions dated within `[from, to]`, category columns joined.
    async fn transactions_in_range(
        &self,
        session: &Session,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TransactionRecord>>;

    /// Every transaction the user has ever recorded.
    async fn transactions_all(&self, session: &Session) -> Result<Vec<TransactionRecord>>;

    /// The user's categories, optionally restricted to one kind.
    async fn categories(
        &self,
        session: &Session,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Category>>;

    /// Submit a new transaction; returns the stored row.
    async fn create_transaction(
        &self,
        session: &Session,
        draft: &NewTransaction,
    ) -> Result<TransactionRecord>;

    /// Submit a new category; returns the stored row.
    async fn create_category(&self, session: &Session, draft: &NewCategory) -> Result<Category>;
}
