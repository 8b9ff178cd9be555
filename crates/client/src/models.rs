//! Response shapes mirrored from the server.
//!
//! Only the fields a game UI consumes are deserialized; unknown fields are
//! ignored so the client tolerates additive server changes.

use chrono::{DateTime, Utc};
use ironvale_core::types::Currency;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub exp: i64,
    pub gold: i64,
    pub gem: i64,
    pub avatar: Option<String>,
    pub mode: Option<String>,
    pub health: i64,
    pub max_health: i64,
    pub hunger: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    pub rarity: String,
    pub category: String,
    pub item_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item_id: String,
    pub quantity: i64,
    pub equipped: bool,
    pub durability: Option<i64>,
    pub upgrade_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuyResponse {
    pub gold: i64,
    pub gem: i64,
    pub item_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SellResponse {
    pub gold: i64,
    pub gem: i64,
    pub credited: i64,
    pub currency: Currency,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UseItemResponse {
    pub health: i64,
    pub max_health: i64,
    pub remaining_quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Material {
    pub item_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub result_item_id: String,
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckinResponse {
    pub gold: i64,
    pub credited: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HuntResponse {
    pub gold: i64,
    pub level: i64,
    pub exp: i64,
    pub gained_gold: i64,
    pub gained_exp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mail {
    pub id: i64,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub reward_amount: i64,
    pub reward_currency: String,
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaimRewardResponse {
    pub gold: i64,
    pub gem: i64,
    pub reward_amount: i64,
    pub reward_currency: Currency,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward_amount: i64,
    pub reward_currency: Currency,
    pub claimed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub character_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub level: i64,
    pub gold: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEntry {
    pub id: i64,
    pub action: String,
    pub item_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}
