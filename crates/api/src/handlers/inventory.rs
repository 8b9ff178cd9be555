//! Handlers for inventory listing, item use, and equipping.

use axum::extract::{Path, State};
use axum::Json;
use ironvale_core::economy::ITEM_HEAL_AMOUNT;
use ironvale_core::error::CoreError;
use ironvale_core::progression::heal;
use ironvale_db::models::inventory::InventoryRow;
use ironvale_db::repositories::{CharacterRepo, InventoryRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// Result of consuming an item.
#[derive(Debug, Serialize)]
pub struct UseItemResponse {
    pub health: i64,
    pub max_health: i64,
    /// Quantity of the item left after use.
    pub remaining_quantity: i64,
}

/// GET /api/game/inventory
pub async fn list(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<Vec<InventoryRow>>> {
    let rows = InventoryRepo::list_for_character(&state.pool, character.id).await?;
    Ok(Json(rows))
}

/// POST /api/game/use-item/{item_id}
///
/// Consume one unit and apply the flat heal, capped at max health. There is
/// no per-item effect table; every consumable heals the same amount.
pub async fn use_item(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Path(item_id): Path<String>,
) -> AppResult<Json<UseItemResponse>> {
    let mut tx = state.pool.begin().await?;

    let row = InventoryRepo::find(&mut *tx, character.id, &item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item" }))?;

    let remaining_quantity = row.quantity - 1;
    if remaining_quantity == 0 {
        InventoryRepo::delete_by_id(&mut *tx, row.id).await?;
    } else {
        InventoryRepo::decrement_by_id(&mut *tx, row.id, 1).await?;
    }

    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;
    let health = heal(character.health, character.max_health, ITEM_HEAL_AMOUNT);
    CharacterRepo::set_health(&mut *tx, character.id, health).await?;

    tx.commit().await?;

    Ok(Json(UseItemResponse {
        health,
        max_health: character.max_health,
        remaining_quantity,
    }))
}

/// POST /api/game/equip/{item_id}
///
/// Toggle the row's equipped flag. Nothing unequips other items: slot
/// exclusivity is not modeled.
pub async fn equip(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Path(item_id): Path<String>,
) -> AppResult<Json<InventoryRow>> {
    let row = InventoryRepo::find(&state.pool, character.id, &item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item" }))?;

    let row = InventoryRepo::toggle_equipped(&state.pool, row.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item" }))?;

    Ok(Json(row))
}
