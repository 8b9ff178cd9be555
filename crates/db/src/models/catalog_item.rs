//! Shop catalog entity model.

use serde::Serialize;
use sqlx::FromRow;

/// A purchasable product. `id` is the product code (e.g. `WEP_WOODEN_SWORD`);
/// `item_id` is the inventory item granted on purchase. The two usually match
/// but bundle-style products may diverge.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    pub rarity: String,
    pub category: String,
    pub item_id: String,
    pub visible: bool,
}
