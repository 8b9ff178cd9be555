//! Chat message entity model.

use ironvale_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One global chat line.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatMessage {
    pub id: DbId,
    pub character_id: DbId,
    pub character_name: String,
    pub body: String,
    pub created_at: Timestamp,
}
