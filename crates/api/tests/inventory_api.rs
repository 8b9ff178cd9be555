//! HTTP-level integration tests for inventory: consuming items, equipping,
//! and the acting-character header.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, get_auth, get_auth_char, post_auth, post_json_auth,
    register_and_login,
};
use ironvale_db::repositories::CharacterRepo;
use sqlx::SqlitePool;

async fn buy(pool: &SqlitePool, token: &str, product_id: &str, quantity: i64) {
    let body = serde_json::json!({ "product_id": product_id, "quantity": quantity });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/game/buy", token, body).await;
    assert_eq!(response.status(), StatusCode::OK, "purchase should succeed");
}

async fn character_id(pool: &SqlitePool, token: &str) -> i64 {
    let response = get_auth(build_test_app(pool.clone()), "/api/game/profile/me", token).await;
    body_json(response).await["id"].as_i64().expect("profile must carry id")
}

// ---------------------------------------------------------------------------
// Consuming items
// ---------------------------------------------------------------------------

/// Using a consumable heals a flat amount and burns one unit.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_use_item_heals(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    buy(&pool, &token, "CON_HEALTH_POTION", 2).await;

    // Wound the character so the heal is observable.
    let id = character_id(&pool, &token).await;
    CharacterRepo::set_health(&pool, id, 50)
        .await
        .expect("health update should succeed");

    let response = post_auth(
        build_test_app(pool.clone()),
        "/api/game/use-item/CON_HEALTH_POTION",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["health"], 70);
    assert_eq!(json["max_health"], 100);
    assert_eq!(json["remaining_quantity"], 1);
}

/// Healing never exceeds max health.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_use_item_heal_caps_at_max(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    buy(&pool, &token, "CON_HEALTH_POTION", 1).await;

    let id = character_id(&pool, &token).await;
    CharacterRepo::set_health(&pool, id, 95)
        .await
        .expect("health update should succeed");

    let response = post_auth(
        build_test_app(pool),
        "/api/game/use-item/CON_HEALTH_POTION",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["health"], 100);
}

/// Using the last unit removes the inventory row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_use_last_item_removes_row(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    buy(&pool, &token, "CON_HEALTH_POTION", 1).await;

    let response = post_auth(
        build_test_app(pool.clone()),
        "/api/game/use-item/CON_HEALTH_POTION",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["remaining_quantity"], 0);

    let response = get_auth(build_test_app(pool), "/api/game/inventory", &token).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

/// Using an item the character does not hold is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_use_missing_item(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;

    let response = post_auth(
        build_test_app(pool),
        "/api/game/use-item/CON_HEALTH_POTION",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Equipping
// ---------------------------------------------------------------------------

/// Equip toggles: on, then off again.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_equip_toggles(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    buy(&pool, &token, "WEP_WOODEN_SWORD", 1).await;

    let response = post_auth(
        build_test_app(pool.clone()),
        "/api/game/equip/WEP_WOODEN_SWORD",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["equipped"], true);

    let response = post_auth(
        build_test_app(pool),
        "/api/game/equip/WEP_WOODEN_SWORD",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["equipped"], false);
}

// ---------------------------------------------------------------------------
// Acting character header
// ---------------------------------------------------------------------------

/// An explicit `X-Character-Id` selects that character.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_character_header_selects_character(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    let body = serde_json::json!({ "name": "alt" });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/auth/character", &token, body).await;
    let alt_id = body_json(response).await["id"].as_i64().unwrap();

    let response = get_auth_char(
        build_test_app(pool),
        "/api/game/profile/me",
        &token,
        alt_id,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "alt");
}

/// Addressing another account's character is forbidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_character_header_cross_account(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;
    let other_token = register_and_login(&pool, "alex", "a@x.com", "abc123").await;
    let other_id = character_id(&pool, &other_token).await;

    let response = get_auth_char(
        build_test_app(pool),
        "/api/game/profile/me",
        &token,
        other_id,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A non-numeric header is a validation error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_character_header_not_numeric(pool: SqlitePool) {
    let token = register_and_login(&pool, "steve", "s@x.com", "abc123").await;

    let request = axum::http::Request::builder()
        .uri("/api/game/profile/me")
        .header("authorization", format!("Bearer {token}"))
        .header("x-character-id", "bogus")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(build_test_app(pool), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
