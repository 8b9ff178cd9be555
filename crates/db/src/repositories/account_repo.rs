//! Repository for the `accounts` table.

use ironvale_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::account::{Account, CreateAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, role, status, created_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    pub async fn create(
        ex: impl SqliteExecutor<'_>,
        input: &CreateAccount,
    ) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (username, email, password_hash)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(ex)
            .await
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = ?");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }

    /// Find an account by email (case-sensitive).
    pub async fn find_by_email(
        ex: impl SqliteExecutor<'_>,
        email: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = ?");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(ex)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        ex: impl SqliteExecutor<'_>,
        username: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = ?");
        sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(ex)
            .await
    }

    /// Replace an account's password hash. Returns `true` if a row was updated.
    pub async fn update_password(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE accounts SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the account status (`active` / `banned`). Returns `true` if updated.
    pub async fn set_status(
        ex: impl SqliteExecutor<'_>,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE accounts SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
