//! Repository for the append-only `transactions` log.

use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::transaction::{NewTransaction, TransactionRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, action, item_id, amount, currency, created_at";

/// Append and read log entries. There is no update or delete path.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Append one log entry.
    pub async fn append(
        ex: impl SqliteExecutor<'_>,
        input: &NewTransaction,
    ) -> Result<TransactionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (character_id, action, item_id, amount, currency)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TransactionRow>(&query)
            .bind(input.character_id)
            .bind(input.action.as_str())
            .bind(&input.item_id)
            .bind(input.amount)
            .bind(input.currency.as_str())
            .fetch_one(ex)
            .await
    }

    /// A character's log entries, newest first.
    pub async fn list_for_character(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
    ) -> Result<Vec<TransactionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions WHERE character_id = ? ORDER BY id DESC"
        );
        sqlx::query_as::<_, TransactionRow>(&query)
            .bind(character_id)
            .fetch_all(ex)
            .await
    }
}
