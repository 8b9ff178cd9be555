//! Handlers for the flat-reward activities: daily check-in and monster hunts.

use axum::extract::State;
use axum::Json;
use ironvale_core::economy::{DAILY_CHECKIN_GOLD, HUNT_EXP, HUNT_GOLD};
use ironvale_core::error::CoreError;
use ironvale_core::progression::apply_exp;
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{CharacterRepo, TransactionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// Result of a daily check-in.
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub gold: i64,
    pub credited: i64,
}

/// Result of a monster hunt.
#[derive(Debug, Serialize)]
pub struct HuntResponse {
    pub gold: i64,
    pub level: i64,
    pub exp: i64,
    pub gained_gold: i64,
    pub gained_exp: i64,
}

/// POST /api/game/daily-checkin
///
/// Flat gold credit. There is no server-side once-per-day gate; clients
/// enforce the daily cadence locally.
pub async fn daily_checkin(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<CheckinResponse>> {
    let mut tx = state.pool.begin().await?;

    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;

    let gold = character.gold + DAILY_CHECKIN_GOLD;
    CharacterRepo::set_balances(&mut *tx, character.id, gold, character.gem).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Checkin,
            item_id: None,
            amount: DAILY_CHECKIN_GOLD,
            currency: Currency::Gold,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(Json(CheckinResponse {
        gold,
        credited: DAILY_CHECKIN_GOLD,
    }))
}

/// POST /api/game/hunt
///
/// Flat gold and experience reward; levels recalculate through the
/// `100 * level` threshold loop.
pub async fn hunt(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<HuntResponse>> {
    let mut tx = state.pool.begin().await?;

    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;

    let gold = character.gold + HUNT_GOLD;
    let (level, exp) = apply_exp(character.level, character.exp, HUNT_EXP);

    CharacterRepo::set_balances(&mut *tx, character.id, gold, character.gem).await?;
    CharacterRepo::set_progress(&mut *tx, character.id, level, exp).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Hunt,
            item_id: None,
            amount: HUNT_GOLD,
            currency: Currency::Gold,
        },
    )
    .await?;

    tx.commit().await?;

    if level > character.level {
        tracing::info!(character_id = character.id, level, "character leveled up");
    }

    Ok(Json(HuntResponse {
        gold,
        level,
        exp,
        gained_gold: HUNT_GOLD,
        gained_exp: HUNT_EXP,
    }))
}
