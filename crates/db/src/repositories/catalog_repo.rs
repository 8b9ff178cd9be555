//! Repository for the `catalog_items` table (read-only from the API).

use sqlx::SqliteExecutor;

use crate::models::catalog_item::CatalogItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, currency, rarity, category, item_id, visible";

/// Read access to the shop catalog.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Find a product by its code, regardless of visibility.
    pub async fn find_by_id(
        ex: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_items WHERE id = ?");
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }

    /// Find a purchasable (visible) product by its code.
    pub async fn find_visible_by_id(
        ex: impl SqliteExecutor<'_>,
        id: &str,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_items WHERE id = ? AND visible = 1");
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }

    /// One page of visible products, in catalog order.
    pub async fn list_visible(
        ex: impl SqliteExecutor<'_>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_items WHERE visible = 1 ORDER BY id LIMIT ? OFFSET ?"
        );
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(ex)
            .await
    }

    /// The catalog entry granting the given inventory item, if any.
    /// Used to price sell-backs.
    pub async fn find_by_item_id(
        ex: impl SqliteExecutor<'_>,
        item_id: &str,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_items WHERE item_id = ? LIMIT 1");
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(item_id)
            .fetch_optional(ex)
            .await
    }
}
