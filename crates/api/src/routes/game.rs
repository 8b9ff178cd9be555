//! Route definitions for the `/game` resource.
//!
//! Every endpoint here requires a bearer token; most also resolve an acting
//! character (from the `X-Character-Id` header, or the account's first
//! character).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    activity, chat, craft, inventory, leaderboard, mail, profile, quest, shop, transactions,
};
use crate::state::AppState;

/// Routes mounted at `/game`.
pub fn router() -> Router<AppState> {
    Router::new()
        // Character profile.
        .route("/profile/me", get(profile::me))
        // Shop: catalog page, buy, sell.
        .route("/shop", get(shop::list_shop))
        .route("/buy", post(shop::buy))
        .route("/sell", post(shop::sell))
        // Inventory: listing, consuming, equipping.
        .route("/inventory", get(inventory::list))
        .route("/use-item/{item_id}", post(inventory::use_item))
        .route("/equip/{item_id}", post(inventory::equip))
        // Crafting.
        .route("/recipes", get(craft::list_recipes))
        .route("/craft/{recipe_id}", post(craft::craft))
        // Flat-reward activities.
        .route("/daily-checkin", post(activity::daily_checkin))
        .route("/hunt", post(activity::hunt))
        // Mailbox.
        .route("/mail", get(mail::list))
        .route("/mail/claim/{id}", post(mail::claim))
        // Quests.
        .route("/my-quests", get(quest::my_quests))
        .route("/quests/claim/{quest_id}", post(quest::claim))
        // World chat.
        .route("/chat", get(chat::list).post(chat::send))
        // Leaderboard.
        .route("/leaderboard", get(leaderboard::top))
        // Transaction ledger.
        .route("/transactions/my", get(transactions::my_transactions))
}
