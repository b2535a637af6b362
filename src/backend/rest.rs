//! REST client for the hosted backend.
//!
//! The backend exposes a PostgREST-style interface: tables are URL path
//! segments, filters are `column=op.value` query parameters, and joined
//! columns are requested through an embedded `select` list. Requests carry
//! the project API key plus the session's bearer token, which is what
//! scopes rows to the signed-in user on the server side.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;

use crate::models::{Category, TransactionKind};
use crate::session::Session;

use super::{NewCategory, NewTransaction, TransactionRecord, TransactionSource};

/// Columns requested for transaction rows, category columns joined in.
const TRANSACTION_SELECT: &str =
    "id,created_at,date,amount,description,user_id,category_id,type,Category(name,type,icon)";

#[derive(Debug, Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_trailing_slashes(base_url.into()),
            api_key: api_key.into(),
        }
    }

    /// Use a custom HTTP client (timeouts, proxies).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Point the client at a different endpoint root (used by HTTP tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = trim_trailing_slashes(base_url.into());
        self
    }

    fn get(&self, session: &Session, table: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/{}", self.base_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(session.bearer_token())
    }

    fn post(&self, session: &Session, table: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}/{}", self.base_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(session.bearer_token())
            // Ask the backend to echo the inserted row back.
            .header("Prefer", "return=representation")
    }

    async fn fetch_transactions(
        &self,
        session: &Session,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<TransactionRecord>> {
        let mut request = self.get(session, "Transaction").query(&[
            ("select", TRANSACTION_SELECT.to_string()),
            ("user_id", format!("eq.{}", session.user_id())),
        ]);
        if let Some((from, to)) = range {
            request = request.query(&[("date", format!("gte.{from}")), ("date", format!("lte.{to}"))]);
        }

        let records = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Backend returned malformed transaction rows")?;
        Ok(records)
    }
}

fn trim_trailing_slashes(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[async_trait::async_trait]
impl TransactionSource for RestBackend {
    async fn transactions_in_range(
        &self,
        session: &Session,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        self.fetch_transactions(session, Some((from, to))).await
    }

    async fn transactions_all(&self, session: &Session) -> Result<Vec<TransactionRecord>> {
        self.fetch_transactions(session, None).await
    }

    async fn categories(
        &self,
        session: &Session,
        kind: Option<TransactionKind>,
    ) -> Result<Vec<Category>> {
        let mut request = self
            .get(session, "Category")
            .query(&[("user_id", format!("eq.{}", session.user_id()))]);
        if let Some(kind) = kind {
            request = request.query(&[("type", format!("eq.{}", kind.as_str()))]);
        }

        let categories = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Backend returned malformed category rows")?;
        Ok(categories)
    }

    async fn create_transaction(
        &self,
        session: &Session,
        draft: &NewTransaction,
    ) -> Result<TransactionRecord> {
        draft.validate()?;

        let rows: Vec<TransactionRecord> = self
            .post(session, "Transaction")
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Backend returned malformed transaction rows")?;
        rows.into_iter()
            .next()
            .context("Backend returned no row for the created transaction")
    }

    async fn create_category(&self, session: &Session, draft: &NewCategory) -> Result<Category> {
        draft.validate()?;

        let rows: Vec<Category> = self
            .post(session, "Category")
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Backend returned malformed category rows")?;
        rows.into_iter()
            .next()
            .context("Backend returned no row for the created category")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let backend = RestBackend::new("https://example.supabase.co/rest/v1//", "key");
        assert_eq!(backend.base_url, "https://example.supabase.co/rest/v1");
    }

    #[test]
    fn transaction_select_requests_the_category_join() {
        assert!(TRANSACTION_SELECT.contains("Category(name,type,icon)"));
    }
}
