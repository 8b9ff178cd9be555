//! Account entity model and DTOs.

use ironvale_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
}

impl Account {
    /// Whether the account may log in.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            username: a.username,
            email: a.email,
            role: a.role,
        }
    }
}

/// DTO for creating a new account.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
