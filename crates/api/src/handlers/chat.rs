//! Handlers for the world chat channel.

use axum::extract::State;
use axum::Json;
use ironvale_core::economy::CHAT_BUFFER_CAP;
use ironvale_core::error::CoreError;
use ironvale_db::models::chat::ChatMessage;
use ironvale_db::repositories::ChatRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::character::ActiveCharacter;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendChatRequest {
    pub message: String,
}

/// GET /api/game/chat
///
/// The retained tail of the channel, oldest first.
pub async fn list(
    State(state): State<AppState>,
    ActiveCharacter(_character): ActiveCharacter,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = ChatRepo::list_recent(&state.pool, CHAT_BUFFER_CAP).await?;
    Ok(Json(messages))
}

/// POST /api/game/chat
///
/// Append under the character's name and prune the channel back to its cap.
pub async fn send(
    State(state): State<AppState>,
    ActiveCharacter(character): ActiveCharacter,
    Json(req): Json<SendChatRequest>,
) -> AppResult<Json<ChatMessage>> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message must not be empty".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;
    let row = ChatRepo::append(&mut *tx, character.id, &character.name, message).await?;
    tx.commit().await?;

    Ok(Json(row))
}
