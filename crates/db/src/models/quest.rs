//! Quest claim entity model.

use ironvale_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Records that a character claimed a quest reward. Quest definitions
/// themselves live in `ironvale_core::quests`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuestClaim {
    pub id: DbId,
    pub character_id: DbId,
    pub quest_id: String,
    pub claimed_at: Timestamp,
}
