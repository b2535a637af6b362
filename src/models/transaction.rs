use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryRef, Id};

/// Whether a transaction adds to or draws from the user's balance.
///
/// The wire `type` column is free text; anything outside the two known
/// values decodes to `Other`, which the aggregators add to neither sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Other,
}

impl TransactionKind {
    /// Wire values are matched exactly; anything else is `Other`.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TransactionKind::from_wire(&raw))
    }
}

/// A dated income or expense record, decoded and validated.
///
/// The amount is a magnitude; direction is carried entirely by `kind`.
/// Aggregation treats these as immutable input and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Id,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Id>,
    /// Joined category columns, when the fetch requested them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Id::new(),
            date,
            amount,
            description: description.into(),
            kind,
            category_id: None,
            category: None,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    pub fn with_category_id(mut self, category_id: Id) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_category(mut self, category_id: Id, category: CategoryRef) -> Self {
        self.category_id = Some(category_id);
        self.category = Some(category);
        self
    }
}
