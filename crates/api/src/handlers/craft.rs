//! Handlers for the crafting table.

use axum::extract::{Path, State};
use axum::Json;
use ironvale_core::error::CoreError;
use ironvale_core::recipes::{self, Recipe};
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::inventory::InventoryRow;
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{InventoryRepo, TransactionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// GET /api/game/recipes
///
/// The static recipe table, straight from the core crate.
pub async fn list_recipes(
    ActiveCharacter(_character): ActiveCharacter,
) -> AppResult<Json<&'static [Recipe]>> {
    Ok(Json(recipes::RECIPES))
}

/// POST /api/game/craft/{recipe_id}
///
/// Grant the recipe's result item. Materials are listed to the client but not
/// consumed -- crafting is free while the economy is tuned.
pub async fn craft(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Path(recipe_id): Path<String>,
) -> AppResult<Json<InventoryRow>> {
    let recipe = recipes::find(&recipe_id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Recipe" }))?;

    let mut tx = state.pool.begin().await?;

    let row = InventoryRepo::add(&mut *tx, character.id, recipe.result_item_id, 1).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Craft,
            item_id: Some(recipe.result_item_id.to_string()),
            amount: 0,
            currency: Currency::Gold,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(Json(row))
}
