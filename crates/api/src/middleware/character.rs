//! Character-context extractor for game handlers.
//!
//! The client names its acting character through the `X-Character-Id` header.
//! Ownership is verified against the authenticated account before any read or
//! mutation; a header pointing at someone else's character is rejected rather
//! than trusted. With no header, the account's first character is used.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ironvale_core::error::CoreError;
use ironvale_core::types::DbId;
use ironvale_db::models::character::Character;
use ironvale_db::repositories::CharacterRepo;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Header naming the acting character.
pub const CHARACTER_HEADER: &str = "x-character-id";

/// The acting character, resolved and ownership-checked.
///
/// The wrapped [`Character`] is a snapshot from resolution time; handlers
/// that mutate balances re-read the row inside their transaction.
#[derive(Debug, Clone)]
pub struct ActiveCharacter(pub Character);

impl FromRequestParts<AppState> for ActiveCharacter {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let header = parts
            .headers
            .get(CHARACTER_HEADER)
            .and_then(|v| v.to_str().ok());

        let character = match header {
            Some(raw) => {
                let id: DbId = raw.parse().map_err(|_| {
                    AppError::Core(CoreError::Validation(
                        "X-Character-Id must be a numeric id".into(),
                    ))
                })?;
                CharacterRepo::find_owned(&state.pool, id, auth.account_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Forbidden(
                            "Character does not belong to this account".into(),
                        ))
                    })?
            }
            None => CharacterRepo::first_for_account(&state.pool, auth.account_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Character",
                }))?,
        };

        Ok(ActiveCharacter(character))
    }
}
