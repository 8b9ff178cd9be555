//! Transaction log entity model.

use ironvale_core::types::{Currency, DbId, LogAction, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One append-only log row. `amount` is signed: debits are negative.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionRow {
    pub id: DbId,
    pub character_id: DbId,
    pub action: String,
    pub item_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub created_at: Timestamp,
}

/// DTO for appending a log entry.
#[derive(Debug)]
pub struct NewTransaction {
    pub character_id: DbId,
    pub action: LogAction,
    pub item_id: Option<String>,
    pub amount: i64,
    pub currency: Currency,
}
