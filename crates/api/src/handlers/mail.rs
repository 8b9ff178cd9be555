//! Handlers for the mailbox.

use axum::extract::{Path, State};
use axum::Json;
use ironvale_core::error::CoreError;
use ironvale_core::types::{Currency, DbId, LogAction};
use ironvale_db::models::mail::Mail;
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{CharacterRepo, MailRepo, TransactionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

/// Result of claiming a mail reward.
#[derive(Debug, Serialize)]
pub struct ClaimMailResponse {
    pub gold: i64,
    pub gem: i64,
    pub reward_amount: i64,
    pub reward_currency: Currency,
}

/// GET /api/game/mail
pub async fn list(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
) -> AppResult<Json<Vec<Mail>>> {
    let mail = MailRepo::list_for_character(&state.pool, character.id).await?;
    Ok(Json(mail))
}

/// POST /api/game/mail/claim/{id}
///
/// Credit the mail's reward and mark it claimed, atomically. A second claim
/// is a conflict.
pub async fn claim(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Path(mail_id): Path<DbId>,
) -> AppResult<Json<ClaimMailResponse>> {
    let mut tx = state.pool.begin().await?;

    let mail = MailRepo::find_for_character(&mut *tx, mail_id, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Mail" }))?;

    // The guarded UPDATE is the arbiter; the fetched row may be stale.
    if !MailRepo::mark_claimed(&mut *tx, mail.id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Mail reward already claimed".into(),
        )));
    }

    let currency = Currency::parse_or_gold(&mail.reward_currency);
    let character = CharacterRepo::find_by_id(&mut *tx, character.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;
    let (gold, gem) = match currency {
        Currency::Gold => (character.gold + mail.reward_amount, character.gem),
        Currency::Gem => (character.gold, character.gem + mail.reward_amount),
    };
    CharacterRepo::set_balances(&mut *tx, character.id, gold, gem).await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Mail,
            item_id: None,
            amount: mail.reward_amount,
            currency,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(Json(ClaimMailResponse {
        gold,
        gem,
        reward_amount: mail.reward_amount,
        reward_currency: currency,
    }))
}
