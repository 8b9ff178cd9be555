//! Handlers for the `/auth` resource (register, login, password change,
//! character management).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ironvale_core::economy::MAX_CHARACTERS_PER_ACCOUNT;
use ironvale_core::error::CoreError;
use ironvale_core::identity;
use ironvale_core::types::{Currency, LogAction};
use ironvale_db::models::account::{AccountResponse, CreateAccount};
use ironvale_db::models::character::Character;
use ironvale_db::models::mail::CreateMail;
use ironvale_db::models::transaction::NewTransaction;
use ironvale_db::repositories::{AccountRepo, CharacterRepo, MailRepo, TransactionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `PUT /auth/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Request body for `POST /auth/character`.
#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Creates the account and its default character with the fixed starting
/// balances, delivers the welcome mail, and logs the registration. No token
/// is issued; the client logs in separately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    identity::validate_registration(&input.username, &input.email, &input.password)?;

    if AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already in use".into(),
        )));
    }
    if AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already taken".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut tx = state.pool.begin().await?;

    let account = AccountRepo::create(
        &mut *tx,
        &CreateAccount {
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash,
        },
    )
    .await?;

    let character = CharacterRepo::create(&mut *tx, account.id, &input.username).await?;

    MailRepo::create(
        &mut *tx,
        &CreateMail {
            character_id: character.id,
            sender: "Postmaster".to_string(),
            subject: "Welcome to Ironvale".to_string(),
            body: "A small gift to get you started.".to_string(),
            reward_amount: 2,
            reward_currency: Currency::Gem,
        },
    )
    .await?;

    TransactionRepo::append(
        &mut *tx,
        &NewTransaction {
            character_id: character.id,
            action: LogAction::Register,
            item_id: None,
            amount: 0,
            currency: Currency::Gold,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(account_id = account.id, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created")),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a 7-day bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Auth("Invalid email or password".into())))?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Auth(
            "Invalid email or password".into(),
        )));
    }

    if !account.is_active() {
        return Err(AppError::Core(CoreError::Auth(
            "Account is not active".into(),
        )));
    }

    let token = generate_token(account.id, &account.username, &account.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    // Login entries are logged against the account's first character.
    if let Some(character) = CharacterRepo::first_for_account(&state.pool, account.id).await? {
        TransactionRepo::append(
            &state.pool,
            &NewTransaction {
                character_id: character.id,
                action: LogAction::Login,
                item_id: None,
                amount: 0,
                currency: Currency::Gold,
            },
        )
        .await?;
    }

    Ok(Json(LoginResponse {
        token,
        account: account.into(),
    }))
}

/// PUT /api/auth/password
///
/// Replace the authenticated account's password hash.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    let account = AccountRepo::find_by_id(&state.pool, auth.account_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Auth("Account no longer exists".into())))?;

    let old_valid = verify_password(&input.old_password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(AppError::Core(CoreError::Auth(
            "Old password is incorrect".into(),
        )));
    }

    identity::validate_password(&input.new_password)?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    AccountRepo::update_password(&state.pool, account.id, &password_hash).await?;

    Ok(Json(MessageResponse::new("Password updated")))
}

/// GET /api/auth/characters
pub async fn list_characters(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_for_account(&state.pool, auth.account_id).await?;
    Ok(Json(characters))
}

/// POST /api/auth/character
///
/// Create an additional character, capped at three per account.
pub async fn create_character(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCharacterRequest>,
) -> AppResult<(StatusCode, Json<Character>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Character name is required".into(),
        )));
    }

    let count = CharacterRepo::count_for_account(&state.pool, auth.account_id).await?;
    if count >= MAX_CHARACTERS_PER_ACCOUNT {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Accounts are limited to {MAX_CHARACTERS_PER_ACCOUNT} characters"
        ))));
    }

    let character = CharacterRepo::create(&state.pool, auth.account_id, input.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(character)))
}
