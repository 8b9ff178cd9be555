//! Handlers for quests: the static definition table joined with per-character
//! claim state.

use axum::extract::{Path, State};
use axum::Json;
use ironvale_core::error::CoreError;
use ironvale_core::quests;
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{CharacterRepo, QuestRepo, TransactionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// A quest definition decorated with the acting character's claim state.
#[derive(Debug, Serialize)]
pub struct QuestView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward_amount: i64,
    pub reward_currency: Currency,
    pub claimed: bool,
}

/// Result of claiming a quest reward.
#[derive(Debug, Serialize)]
pub struct ClaimQuestResponse {
    pub gold: i64,
    pub gem: i64,
    pub reward_amount: i64,
    pub reward_currency: Currency,
}

/// GET /api/game/my-quests
pub async fn my_quests(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<Vec<QuestView>>> {
    let claims = QuestRepo::claims_for_character(&state.pool, character.id).await?;

    let views = quests::QUESTS
        .iter()
        .map(|q| QuestView {
            id: q.id,
            name: q.name,
            description: q.description,
            reward_amount: q.reward_amount,
            reward_currency: q.reward_currency,
            claimed: claims.iter().any(|c| c.quest_id == q.id),
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/game/quests/claim/{quest_id}
///
/// Credit the quest's flat reward once. The unique claim row absorbs races;
/// a repeat claim is a conflict.
pub async fn claim(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Path(quest_id): Path<String>,
) -> AppResult<Json<ClaimQuestResponse>> {
    let quest =
        quests::find(&quest_id).ok_or(AppError::Core(CoreError::NotFound { entity: "Quest" }))?;

    let mut tx = state.pool.begin().await?;

    if !QuestRepo::try_claim(&mut *tx, character.id, quest.id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Quest reward already claimed".into(),
        )));
    }

    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;
    let (gold, gem) = match quest.reward_currency {
        Currency::Gold => (character.gold + quest.reward_amount, character.gem),
        Currency::Gem => (character.gold, character.gem + quest.reward_amount),
    };
    CharacterRepo::set_balances(&mut *tx, character.id, gold, gem).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Quest,
            item_id: None,
            amount: quest.reward_amount,
            currency: quest.reward_currency,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(Json(ClaimQuestResponse {
        gold,
        gem,
        reward_amount: quest.reward_amount,
        reward_currency: quest.reward_currency,
    }))
}
