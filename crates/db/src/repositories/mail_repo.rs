//! Repository for the `mail` table.

use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::mail::{CreateMail, Mail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, sender, subject, body, reward_amount, \
                       reward_currency, claimed, created_at";

/// Provides CRUD operations for mailbox rows.
pub struct MailRepo;

impl MailRepo {
    /// Deliver a new mail to a character.
    pub async fn create(
        ex: impl SqliteExecutor<'_>,
        input: &CreateMail,
    ) -> Result<Mail, sqlx::Error> {
        let query = format!(
            "INSERT INTO mail (character_id, sender, subject, body, reward_amount, reward_currency)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mail>(&query)
            .bind(input.character_id)
            .bind(&input.sender)
            .bind(&input.subject)
            .bind(&input.body)
            .bind(input.reward_amount)
            .bind(input.reward_currency.as_str())
            .fetch_one(ex)
            .await
    }

    /// A character's mailbox, newest first.
    pub async fn list_for_character(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
    ) -> Result<Vec<Mail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mail WHERE character_id = ? ORDER BY id DESC");
        sqlx::query_as::<_, Mail>(&query)
            .bind(character_id)
            .fetch_all(ex)
            .await
    }

    /// Find a mail by ID only if it belongs to the given character.
    pub async fn find_for_character(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        character_id: DbId,
    ) -> Result<Option<Mail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mail WHERE id = ? AND character_id = ?");
        sqlx::query_as::<_, Mail>(&query)
            .bind(id)
            .bind(character_id)
            .fetch_optional(ex)
            .await
    }

    /// Mark a mail claimed. Returns `false` if it was already claimed, which
    /// the handler reports as a conflict.
    pub async fn mark_claimed(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE mail SET claimed = 1 WHERE id = ? AND claimed = 0")
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
