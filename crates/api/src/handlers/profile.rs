//! Handler for the current character's profile.

use axum::Json;
use ironvale_db::models::character::Character;

use crate::error::AppResult;
use crate::middleware::character::ActiveCharacter;

/// GET /api/game/profile/me
///
/// A read-only snapshot of the acting character.
pub async fn me(ActiveCharacter(character): ActiveCharacter) -> AppResult<Json<Character>> {
    Ok(Json(character))
}
