mod category;
mod id;
mod transaction;

pub use category::{Category, CategoryRef};
pub use id::Id;
pub use transaction::{Transaction, TransactionKind};
