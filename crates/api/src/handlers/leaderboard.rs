//! Handler for the global leaderboard.

use axum::extract::State;
use axum::Json;
use ironvale_db::models::character::LeaderboardEntry;
use ironvale_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const LEADERBOARD_SIZE: i64 = 10;

/// GET /api/game/leaderboard
///
/// Top characters by level, gold breaking ties. Requires a session but not a
/// character; spectating is fine.
pub async fn top(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let entries = CharacterRepo::leaderboard(&state.pool, LEADERBOARD_SIZE).await?;
    Ok(Json(entries))
}
