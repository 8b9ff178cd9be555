//! Handlers for the shop: listing, buying, and selling back.
//!
//! Buy and sell are the money paths: both re-read the character's balances
//! inside a transaction so the balance check and the debit/credit commit
//! atomically.

use axum::extract::{Query, State};
use axum::Json;
use ironvale_core::economy::{
    sell_unit_price, total_cost, DEFAULT_ITEM_CURRENCY, DEFAULT_ITEM_PRICE,
};
use ironvale_core::error::CoreError;
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::catalog_item::CatalogItem;
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{CatalogRepo, CharacterRepo, InventoryRepo, TransactionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::query::PageParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /game/buy`.
#[derive(Debug, Deserialize)]
pub struct BuyRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Request body for `POST /game/sell`.
#[derive(Debug, Deserialize)]
pub struct SellRequest {
    pub item_id: String,
    pub quantity: i64,
}

/// Updated balances after a purchase.
#[derive(Debug, Serialize)]
pub struct BuyResponse {
    pub gold: i64,
    pub gem: i64,
    pub item_id: String,
    /// Quantity of the item now held.
    pub quantity: i64,
}

/// Updated balances after a sale.
#[derive(Debug, Serialize)]
pub struct SellResponse {
    pub gold: i64,
    pub gem: i64,
    /// Amount credited by this sale.
    pub credited: i64,
    pub currency: Currency,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/game/shop?page=&page_size=
///
/// One page of visible catalog items. No per-account filtering.
pub async fn list_shop(
    State(state): State<AppState>,
    ActiveCharacter(_character): ActiveCharacter,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let items = CatalogRepo::list_visible(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(items))
}

/// POST /api/game/buy
///
/// Debit the product's price, grant its item (find-or-create the inventory
/// row), and log the purchase -- all in one transaction.
pub async fn buy(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Json(input): Json<BuyRequest>,
) -> AppResult<Json<BuyResponse>> {
    if input.quantity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;

    let product = CatalogRepo::find_visible_by_id(&mut *tx, &input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Product" }))?;

    let cost = total_cost(product.price, input.quantity).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Quantity is too large".into()))
    })?;
    let currency = Currency::parse_or_gold(&product.currency);

    // Re-read balances inside the transaction so the check and the debit
    // cannot interleave with another purchase.
    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;

    let balance = match currency {
        Currency::Gold => character.gold,
        Currency::Gem => character.gem,
    };
    if balance < cost {
        return Err(AppError::Core(CoreError::InsufficientFunds {
            currency,
            needed: cost,
            balance,
        }));
    }

    let (gold, gem) = match currency {
        Currency::Gold => (character.gold - cost, character.gem),
        Currency::Gem => (character.gold, character.gem - cost),
    };
    CharacterRepo::set_balances(&mut *tx, character.id, gold, gem).await?;

    let row = InventoryRepo::add(&mut *tx, character.id, &product.item_id, input.quantity).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Buy,
            item_id: Some(product.item_id.clone()),
            amount: -cost,
            currency,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::debug!(
        character_id = character.id,
        product_id = %product.id,
        cost,
        "purchase completed"
    );

    Ok(Json(BuyResponse {
        gold,
        gem,
        item_id: row.item_id,
        quantity: row.quantity,
    }))
}

/// POST /api/game/sell
///
/// Credit half the catalog price per unit (floor 1) and decrement the
/// inventory row, deleting it when it hits zero.
pub async fn sell(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Json(input): Json<SellRequest>,
) -> AppResult<Json<SellResponse>> {
    if input.quantity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;

    let row = InventoryRepo::find(&mut *tx, character.id, &input.item_id).await?;
    let row = match row {
        Some(row) if row.quantity >= input.quantity => row,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Not enough of that item to sell".into(),
            )));
        }
    };

    // Items without a catalog entry sell at a fixed fallback price.
    let (catalog_price, currency) =
        match CatalogRepo::find_by_item_id(&mut *tx, &input.item_id).await? {
            Some(entry) => (entry.price, Currency::parse_or_gold(&entry.currency)),
            None => (DEFAULT_ITEM_PRICE, DEFAULT_ITEM_CURRENCY),
        };
    let credited = sell_unit_price(catalog_price) * input.quantity;

    if row.quantity == input.quantity {
        InventoryRepo::delete_by_id(&mut *tx, row.id).await?;
    } else {
        InventoryRepo::decrement_by_id(&mut *tx, row.id, input.quantity).await?;
    }

    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;
    let (gold, gem) = match currency {
        Currency::Gold => (character.gold + credited, character.gem),
        Currency::Gem => (character.gold, character.gem + credited),
    };
    CharacterRepo::set_balances(&mut *tx, character.id, gold, gem).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Sell,
            item_id: Some(input.item_id.clone()),
            amount: credited,
            currency,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(Json(SellResponse {
        gold,
        gem,
        credited,
        currency,
    }))
}
