//! Character (player profile) entity model.

use ironvale_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full character row from the `characters` table.
///
/// Safe to serialize as-is: the profile endpoint returns every column.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Character {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub level: i64,
    pub exp: i64,
    pub gold: i64,
    pub gem: i64,
    pub avatar: String,
    pub mode: String,
    pub health: i64,
    pub max_health: i64,
    pub hunger: i64,
    pub created_at: Timestamp,
}

/// One row of the leaderboard view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub level: i64,
    pub gold: i64,
}
