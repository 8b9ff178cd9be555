//! Inventory entity model.

use ironvale_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One (character, item) inventory row. Quantity is always positive; the row
/// is deleted instead of reaching zero.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryRow {
    pub id: DbId,
    pub character_id: DbId,
    pub item_id: String,
    pub quantity: i64,
    pub equipped: bool,
    pub durability: i64,
    pub upgrade_level: i64,
}
