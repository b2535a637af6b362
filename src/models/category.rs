use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, TransactionKind};

/// A user-defined transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub user_id: Id,
    pub name: String,
    /// Short glyph shown next to the name (an emoji in the reference UI).
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

/// The subset of category columns a transaction row arrives joined with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub icon: String,
}

impl CategoryRef {
    /// Icon and name as one display string.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}
