//! Integration tests for the repository layer against a real database:
//! - Account and character creation with starting balances
//! - Unique constraint behaviour (usernames, emails, inventory rows)
//! - Inventory find-or-create, decrement, delete
//! - Chat ring buffer pruning
//! - Quest claim idempotence

use ironvale_core::economy::{CHAT_BUFFER_CAP, STARTING_GEM, STARTING_GOLD};
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::account::CreateAccount;
use ironvale_db::models::mail::CreateMail;
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{
    AccountRepo, CatalogRepo, CharacterRepo, ChatRepo, InventoryRepo, MailRepo, QuestRepo,
    TransactionRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_account(username: &str) -> CreateAccount {
    CreateAccount {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake-hash".to_string(),
    }
}

async fn seed_character(pool: &SqlitePool, username: &str) -> i64 {
    let account = AccountRepo::create(pool, &new_account(username))
        .await
        .expect("account creation should succeed");
    let character = CharacterRepo::create(pool, account.id, username)
        .await
        .expect("character creation should succeed");
    character.id
}

// ---------------------------------------------------------------------------
// Accounts and characters
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_account_and_character(pool: SqlitePool) {
    let account = AccountRepo::create(&pool, &new_account("steve"))
        .await
        .expect("account creation should succeed");
    assert_eq!(account.role, "player");
    assert!(account.is_active());

    let character = CharacterRepo::create(&pool, account.id, "Steve")
        .await
        .expect("character creation should succeed");
    assert_eq!(character.gold, STARTING_GOLD);
    assert_eq!(character.gem, STARTING_GEM);
    assert_eq!(character.level, 1);
    assert_eq!(character.health, 100);
}

#[sqlx::test]
async fn duplicate_username_is_rejected(pool: SqlitePool) {
    AccountRepo::create(&pool, &new_account("dupe"))
        .await
        .expect("first creation should succeed");

    let result = AccountRepo::create(&pool, &new_account("dupe")).await;
    assert!(result.is_err(), "duplicate username must violate uq index");
}

#[sqlx::test]
async fn find_owned_enforces_account(pool: SqlitePool) {
    let a = AccountRepo::create(&pool, &new_account("owner")).await.unwrap();
    let b = AccountRepo::create(&pool, &new_account("other")).await.unwrap();
    let character = CharacterRepo::create(&pool, a.id, "Owner").await.unwrap();

    let owned = CharacterRepo::find_owned(&pool, character.id, a.id)
        .await
        .unwrap();
    assert!(owned.is_some());

    let not_owned = CharacterRepo::find_owned(&pool, character.id, b.id)
        .await
        .unwrap();
    assert!(not_owned.is_none(), "foreign characters must not resolve");
}

#[sqlx::test]
async fn leaderboard_orders_by_level_then_gold(pool: SqlitePool) {
    let account = AccountRepo::create(&pool, &new_account("ranked")).await.unwrap();
    let low = CharacterRepo::create(&pool, account.id, "Low").await.unwrap();
    let rich = CharacterRepo::create(&pool, account.id, "Rich").await.unwrap();
    let high = CharacterRepo::create(&pool, account.id, "High").await.unwrap();

    CharacterRepo::set_progress(&pool, high.id, 5, 0).await.unwrap();
    CharacterRepo::set_balances(&pool, rich.id, 9999, 0).await.unwrap();
    let _ = low;

    let board = CharacterRepo::leaderboard(&pool, 10).await.unwrap();
    assert_eq!(board[0].name, "High");
    assert_eq!(board[1].name, "Rich");
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn seeded_catalog_is_queryable(pool: SqlitePool) {
    let sword = CatalogRepo::find_visible_by_id(&pool, "WEP_WOODEN_SWORD")
        .await
        .unwrap()
        .expect("seed item should exist");
    assert_eq!(sword.price, 50);
    assert_eq!(sword.currency, "gold");

    // Hidden items resolve by id but not through the visible lookup.
    let hidden = CatalogRepo::find_visible_by_id(&pool, "WEP_DEV_BLADE").await.unwrap();
    assert!(hidden.is_none());
    let hidden = CatalogRepo::find_by_id(&pool, "WEP_DEV_BLADE").await.unwrap();
    assert!(hidden.is_some());
}

#[sqlx::test]
async fn catalog_pagination_pages_through(pool: SqlitePool) {
    let first = CatalogRepo::list_visible(&pool, 5, 0).await.unwrap();
    let second = CatalogRepo::list_visible(&pool, 5, 5).await.unwrap();
    assert_eq!(first.len(), 5);
    assert!(!second.is_empty());
    assert_ne!(first[0].id, second[0].id);
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn inventory_add_finds_or_creates(pool: SqlitePool) {
    let character_id = seed_character(&pool, "packrat").await;

    let row = InventoryRepo::add(&pool, character_id, "CON_BREAD", 2).await.unwrap();
    assert_eq!(row.quantity, 2);
    assert!(!row.equipped);

    // Adding again increments the same row rather than inserting a second.
    let row = InventoryRepo::add(&pool, character_id, "CON_BREAD", 3).await.unwrap();
    assert_eq!(row.quantity, 5);

    let all = InventoryRepo::list_for_character(&pool, character_id).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test]
async fn inventory_decrement_and_delete(pool: SqlitePool) {
    let character_id = seed_character(&pool, "seller").await;
    let row = InventoryRepo::add(&pool, character_id, "MAT_HERB", 4).await.unwrap();

    InventoryRepo::decrement_by_id(&pool, row.id, 3).await.unwrap();
    let row = InventoryRepo::find(&pool, character_id, "MAT_HERB")
        .await
        .unwrap()
        .expect("row should remain");
    assert_eq!(row.quantity, 1);

    InventoryRepo::delete_by_id(&pool, row.id).await.unwrap();
    let gone = InventoryRepo::find(&pool, character_id, "MAT_HERB").await.unwrap();
    assert!(gone.is_none());
}

#[sqlx::test]
async fn toggle_equipped_flips_flag(pool: SqlitePool) {
    let character_id = seed_character(&pool, "knight").await;
    let row = InventoryRepo::add(&pool, character_id, "WEP_IRON_SWORD", 1).await.unwrap();

    let row = InventoryRepo::toggle_equipped(&pool, row.id).await.unwrap().unwrap();
    assert!(row.equipped);
    let row = InventoryRepo::toggle_equipped(&pool, row.id).await.unwrap().unwrap();
    assert!(!row.equipped);
}

// ---------------------------------------------------------------------------
// Transactions, mail, chat, quests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn transaction_log_is_append_only_newest_first(pool: SqlitePool) {
    let character_id = seed_character(&pool, "logger").await;

    for (action, amount) in [(LogAction::Buy, -50), (LogAction::Sell, 25)] {
        TransactionRepo::append(
            &pool,
            &NewTransaction {
                character_id,
                action,
                item_id: Some("WEP_WOODEN_SWORD".to_string()),
                amount,
                currency: Currency::Gold,
            },
        )
        .await
        .unwrap();
    }

    let log = TransactionRepo::list_for_character(&pool, character_id).await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].action, "sell");
    assert_eq!(log[0].amount, 25);
    assert_eq!(log[1].action, "buy");
}

#[sqlx::test]
async fn mail_claim_is_single_shot(pool: SqlitePool) {
    let character_id = seed_character(&pool, "reader").await;
    let mail = MailRepo::create(
        &pool,
        &CreateMail {
            character_id,
            sender: "Postmaster".to_string(),
            subject: "Welcome".to_string(),
            body: "Enjoy your stay.".to_string(),
            reward_amount: 5,
            reward_currency: Currency::Gem,
        },
    )
    .await
    .unwrap();

    assert!(MailRepo::mark_claimed(&pool, mail.id).await.unwrap());
    assert!(
        !MailRepo::mark_claimed(&pool, mail.id).await.unwrap(),
        "second claim must be a no-op"
    );
}

#[sqlx::test]
async fn chat_buffer_prunes_to_cap(pool: SqlitePool) {
    let character_id = seed_character(&pool, "chatty").await;

    let mut conn = pool.acquire().await.unwrap();
    for i in 0..(CHAT_BUFFER_CAP + 10) {
        ChatRepo::append(&mut conn, character_id, "chatty", &format!("line {i}"))
            .await
            .unwrap();
    }
    drop(conn);

    let lines = ChatRepo::list_recent(&pool, CHAT_BUFFER_CAP).await.unwrap();
    assert_eq!(lines.len(), CHAT_BUFFER_CAP as usize);
    // Oldest retained line is the 11th written; order is chronological.
    assert_eq!(lines.first().unwrap().body, "line 10");
    assert_eq!(lines.last().unwrap().body, format!("line {}", CHAT_BUFFER_CAP + 9));
}

#[sqlx::test]
async fn quest_claim_rejects_duplicates(pool: SqlitePool) {
    let character_id = seed_character(&pool, "hero").await;

    assert!(QuestRepo::try_claim(&pool, character_id, "QST_FIRST_STEPS").await.unwrap());
    assert!(
        !QuestRepo::try_claim(&pool, character_id, "QST_FIRST_STEPS").await.unwrap(),
        "duplicate claim must be rejected"
    );

    let claims = QuestRepo::claims_for_character(&pool, character_id).await.unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].quest_id, "QST_FIRST_STEPS");
}
