//! Client-side validation for records about to be submitted.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::{Id, TransactionKind};

/// Amounts are entered as text; accept digits with at most two decimals.
fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid amount pattern"))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Invalid amount {value:?}: expected digits with at most two decimal places")]
    InvalidAmount { value: String },
    #[error("Description is required")]
    EmptyDescription,
    #[error("Category name must be 3-30 characters, got {len}")]
    CategoryNameLength { len: usize },
    #[error("Category icon must be at most 20 characters, got {len}")]
    CategoryIconLength { len: usize },
    #[error("Kind must be income or expense")]
    AmbiguousKind,
}

/// A transaction the user has filled in but not yet submitted.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub user_id: Id,
    pub date: NaiveDate,
    /// Raw text from the amount field; validated, then submitted verbatim
    /// so the backend stores exactly what the user typed.
    pub amount: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Id>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), DraftError> {
        if !amount_pattern().is_match(self.amount.trim()) {
            return Err(DraftError::InvalidAmount {
                value: self.amount.clone(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if self.kind == TransactionKind::Other {
            return Err(DraftError::AmbiguousKind);
        }
        Ok(())
    }
}

/// A category the user has filled in but not yet submitted.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub user_id: Id,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), DraftError> {
        let len = self.name.trim().chars().count();
        if !(3..=30).contains(&len) {
            return Err(DraftError::CategoryNameLength { len });
        }
        let icon_len = self.icon.chars().count();
        if icon_len > 20 {
            return Err(DraftError::CategoryIconLength { len: icon_len });
        }
        if self.kind == TransactionKind::Other {
            return Err(DraftError::AmbiguousKind);
        }
        Ok(())
    }
}
