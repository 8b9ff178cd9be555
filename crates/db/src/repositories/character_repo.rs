//! Repository for the `characters` table.

use ironvale_core::economy::{STARTING_GEM, STARTING_GOLD};
use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::character::{Character, LeaderboardEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, name, level, exp, gold, gem, avatar, mode, \
                       health, max_health, hunger, created_at";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character with the fixed starting balances.
    pub async fn create(
        ex: impl SqliteExecutor<'_>,
        account_id: DbId,
        name: &str,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (account_id, name, gold, gem)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(account_id)
            .bind(name)
            .bind(STARTING_GOLD)
            .bind(STARTING_GEM)
            .fetch_one(ex)
            .await
    }

    /// Find a character by internal ID.
    pub async fn find_by_id(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }

    /// Find a character by ID only if it belongs to the given account.
    pub async fn find_owned(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        account_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ? AND account_id = ?");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(account_id)
            .fetch_optional(ex)
            .await
    }

    /// The account's oldest character, used when no character context header
    /// is supplied.
    pub async fn first_for_account(
        ex: impl SqliteExecutor<'_>,
        account_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters WHERE account_id = ? ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(account_id)
            .fetch_optional(ex)
            .await
    }

    /// List all of an account's characters, oldest first.
    pub async fn list_for_account(
        ex: impl SqliteExecutor<'_>,
        account_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE account_id = ? ORDER BY id");
        sqlx::query_as::<_, Character>(&query)
            .bind(account_id)
            .fetch_all(ex)
            .await
    }

    /// Count an account's characters (for the per-account cap).
    pub async fn count_for_account(
        ex: impl SqliteExecutor<'_>,
        account_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM characters WHERE account_id = ?")
            .bind(account_id)
            .fetch_one(ex)
            .await
    }

    /// Overwrite both currency balances.
    pub async fn set_balances(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        gold: i64,
        gem: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE characters SET gold = ?, gem = ? WHERE id = ?")
            .bind(gold)
            .bind(gem)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(())
    }

    /// Overwrite level and experience after a level-up recalculation.
    pub async fn set_progress(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        level: i64,
        exp: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE characters SET level = ?, exp = ? WHERE id = ?")
            .bind(level)
            .bind(exp)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(())
    }

    /// Overwrite current health.
    pub async fn set_health(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        health: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE characters SET health = ? WHERE id = ?")
            .bind(health)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(())
    }

    /// Top characters by level, ties broken by gold.
    pub async fn leaderboard(
        ex: impl SqliteExecutor<'_>,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT name, level, gold FROM characters ORDER BY level DESC, gold DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(ex)
        .await
    }
}
