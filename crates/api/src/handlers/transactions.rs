//! Handler for the per-character transaction ledger.

use axum::extract::State;
use axum::Json;
use ironvale_db::models::transaction::TransactionRow;
use ironvale_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// GET /api/game/transactions/my
///
/// Newest first.
pub async fn my_transactions(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<Vec<TransactionRow>>> {
    let rows = TransactionRepo::list_for_character(&state.pool, character.id).await?;
    Ok(Json(rows))
}
