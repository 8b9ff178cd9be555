//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register    -> register (public)
/// POST /login       -> login (public)
/// PUT  /password    -> change_password (requires auth)
/// GET  /characters  -> list_characters (requires auth)
/// POST /character   -> create_character (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/password", put(auth::change_password))
        .route("/characters", get(auth::list_characters))
        .route("/character", post(auth::create_character))
}
