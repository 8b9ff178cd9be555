//! Mailbox entity model.

use ironvale_core::types::{Currency, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One mailbox row with an optional claimable reward.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mail {
    pub id: DbId,
    pub character_id: DbId,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub reward_amount: i64,
    pub reward_currency: String,
    pub claimed: bool,
    pub created_at: Timestamp,
}

/// DTO for delivering a new mail.
#[derive(Debug)]
pub struct CreateMail {
    pub character_id: DbId,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub reward_amount: i64,
    pub reward_currency: Currency,
}
