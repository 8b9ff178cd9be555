//! Repository for the `quest_claims` table.

use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::quest::QuestClaim;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, quest_id, claimed_at";

/// Tracks which quests a character has already claimed.
pub struct QuestRepo;

impl QuestRepo {
    /// All claim rows for a character.
    pub async fn claims_for_character(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
    ) -> Result<Vec<QuestClaim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quest_claims WHERE character_id = ?");
        sqlx::query_as::<_, QuestClaim>(&query)
            .bind(character_id)
            .fetch_all(ex)
            .await
    }

    /// Record a claim. Returns `false` when the (character, quest) pair is
    /// already claimed -- the unique index absorbs the race.
    pub async fn try_claim(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
        quest_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO quest_claims (character_id, quest_id) VALUES (?, ?)",
        )
        .bind(character_id)
        .bind(quest_id)
        .execute(ex)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
