//! Repository for the `chat_messages` ring buffer.

use ironvale_core::economy::CHAT_BUFFER_CAP;
use ironvale_core::types::DbId;
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::models::chat::ChatMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, character_name, body, created_at";

/// Append and read global chat lines.
pub struct ChatRepo;

impl ChatRepo {
    /// Append a chat line and prune anything beyond the newest
    /// [`CHAT_BUFFER_CAP`] rows. Two statements, so this takes a connection;
    /// run it inside a transaction.
    pub async fn append(
        conn: &mut SqliteConnection,
        character_id: DbId,
        character_name: &str,
        body: &str,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages (character_id, character_name, body)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let message = sqlx::query_as::<_, ChatMessage>(&query)
            .bind(character_id)
            .bind(character_name)
            .bind(body)
            .fetch_one(&mut *conn)
            .await?;

        sqlx::query(
            "DELETE FROM chat_messages WHERE id NOT IN
                 (SELECT id FROM chat_messages ORDER BY id DESC LIMIT ?)",
        )
        .bind(CHAT_BUFFER_CAP)
        .execute(&mut *conn)
        .await?;

        Ok(message)
    }

    /// The newest `limit` lines in chronological order.
    pub async fn list_recent(
        ex: impl SqliteExecutor<'_>,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM
                 (SELECT {COLUMNS} FROM chat_messages ORDER BY id DESC LIMIT ?)
             ORDER BY id"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(limit)
            .fetch_all(ex)
            .await
    }
}
