//! Repository for the `inventory` table.

use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::inventory::InventoryRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, item_id, quantity, equipped, durability, upgrade_level";

/// Provides CRUD operations for inventory rows.
pub struct InventoryRepo;

impl InventoryRepo {
    /// List a character's inventory in acquisition order.
    pub async fn list_for_character(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
    ) -> Result<Vec<InventoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE character_id = ? ORDER BY id");
        sqlx::query_as::<_, InventoryRow>(&query)
            .bind(character_id)
            .fetch_all(ex)
            .await
    }

    /// The character's row for an item, if they hold any.
    pub async fn find(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
        item_id: &str,
    ) -> Result<Option<InventoryRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM inventory WHERE character_id = ? AND item_id = ?");
        sqlx::query_as::<_, InventoryRow>(&query)
            .bind(character_id)
            .bind(item_id)
            .fetch_optional(ex)
            .await
    }

    /// Find-or-create: add `quantity` of an item, creating the row if the
    /// character holds none yet.
    pub async fn add(
        ex: impl SqliteExecutor<'_>,
        character_id: DbId,
        item_id: &str,
        quantity: i64,
    ) -> Result<InventoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (character_id, item_id, quantity)
             VALUES (?, ?, ?)
             ON CONFLICT (character_id, item_id)
             DO UPDATE SET quantity = quantity + excluded.quantity
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryRow>(&query)
            .bind(character_id)
            .bind(item_id)
            .bind(quantity)
            .fetch_one(ex)
            .await
    }

    /// Decrement a row's quantity. The caller must ensure the remaining
    /// quantity stays positive; rows that would reach zero are deleted via
    /// [`Self::delete_by_id`] instead.
    pub async fn decrement_by_id(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        quantity: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE inventory SET quantity = quantity - ? WHERE id = ?")
            .bind(quantity)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(())
    }

    /// Delete an inventory row outright (quantity exhausted).
    pub async fn delete_by_id(ex: impl SqliteExecutor<'_>, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM inventory WHERE id = ?")
            .bind(id)
            .execute(ex)
            .await?;
        Ok(())
    }

    /// Flip a row's equipped flag, returning the updated row.
    pub async fn toggle_equipped(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<InventoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory SET equipped = NOT equipped WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryRow>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }
}
