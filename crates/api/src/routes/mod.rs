pub mod auth;
pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/password                  change password (requires auth)
/// /auth/characters                list characters (requires auth)
/// /auth/character                 create character (requires auth)
///
/// /game/profile/me                acting character profile
/// /game/shop                      visible catalog page
/// /game/buy                       purchase from the catalog
/// /game/sell                      sell back at half price
/// /game/inventory                 inventory listing
/// /game/use-item/{item_id}        consume one unit, heal
/// /game/equip/{item_id}           toggle equipped flag
/// /game/recipes                   static recipe table
/// /game/craft/{recipe_id}         craft the recipe's result
/// /game/daily-checkin             flat gold credit
/// /game/hunt                      flat gold and exp reward
/// /game/mail                      mailbox listing
/// /game/mail/claim/{id}           claim a mail reward (once)
/// /game/my-quests                 quest table with claim state
/// /game/quests/claim/{quest_id}   claim a quest reward (once)
/// /game/chat                      read, send world chat
/// /game/leaderboard               top characters
/// /game/transactions/my           per-character ledger
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account lifecycle (register, login, password, characters).
        .nest("/auth", auth::router())
        // Everything that acts on a character.
        .nest("/game", game::router())
}
