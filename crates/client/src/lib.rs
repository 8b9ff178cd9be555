//! Typed HTTP client for the Ironvale backend.
//!
//! [`ApiClient`] is the single network-facing abstraction a game UI talks to:
//! one method per endpoint, JSON in and out, bearer token and acting-character
//! header attached automatically once set.

pub mod error;
pub mod models;
pub mod poller;
pub mod token_store;

pub use error::ClientError;
pub use poller::Poller;
pub use token_store::TokenStore;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use models::*;

/// Header naming the acting character; mirrors the server's extractor.
pub const CHARACTER_HEADER: &str = "x-character-id";

/// A session-holding client for the Ironvale REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
    character_id: Option<i64>,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash) with no session.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            token: None,
            character_id: None,
        }
    }

    /// Resume a persisted session (e.g. from a [`TokenStore`]).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the session. Subsequent authenticated calls will get 401s.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Select the acting character for `/game` calls. Without this, the
    /// server falls back to the account's first character.
    pub fn set_character(&mut self, character_id: i64) {
        self.character_id = Some(character_id);
    }

    pub fn clear_character(&mut self) {
        self.character_id = None;
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    /// POST /api/auth/register. Does not log in; call [`ApiClient::login`].
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse, ClientError> {
        let body = json!({ "username": username, "email": email, "password": password });
        self.execute(self.request(Method::POST, "/api/auth/register").json(&body))
            .await
    }

    /// POST /api/auth/login. Stores the returned token on success.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let body = json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .execute(self.request(Method::POST, "/api/auth/login").json(&body))
            .await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// PUT /api/auth/password.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ClientError> {
        let body = json!({ "old_password": old_password, "new_password": new_password });
        self.execute(self.request(Method::PUT, "/api/auth/password").json(&body))
            .await
    }

    /// GET /api/auth/characters.
    pub async fn characters(&self) -> Result<Vec<Character>, ClientError> {
        self.execute(self.request(Method::GET, "/api/auth/characters"))
            .await
    }

    /// POST /api/auth/character.
    pub async fn create_character(&self, name: &str) -> Result<Character, ClientError> {
        let body = json!({ "name": name });
        self.execute(self.request(Method::POST, "/api/auth/character").json(&body))
            .await
    }

    // -----------------------------------------------------------------------
    // Profile / shop / inventory
    // -----------------------------------------------------------------------

    /// GET /api/game/profile/me.
    pub async fn me(&self) -> Result<Character, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/profile/me"))
            .await
    }

    /// GET /api/game/shop.
    pub async fn shop(&self, page: i64, page_size: i64) -> Result<Vec<CatalogItem>, ClientError> {
        let path = format!("/api/game/shop?page={page}&page_size={page_size}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// POST /api/game/buy.
    pub async fn buy(&self, product_id: &str, quantity: i64) -> Result<BuyResponse, ClientError> {
        let body = json!({ "product_id": product_id, "quantity": quantity });
        self.execute(self.request(Method::POST, "/api/game/buy").json(&body))
            .await
    }

    /// POST /api/game/sell.
    pub async fn sell(&self, item_id: &str, quantity: i64) -> Result<SellResponse, ClientError> {
        let body = json!({ "item_id": item_id, "quantity": quantity });
        self.execute(self.request(Method::POST, "/api/game/sell").json(&body))
            .await
    }

    /// GET /api/game/inventory.
    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/inventory"))
            .await
    }

    /// POST /api/game/use-item/{item_id}.
    pub async fn use_item(&self, item_id: &str) -> Result<UseItemResponse, ClientError> {
        let path = format!("/api/game/use-item/{item_id}");
        self.execute(self.request(Method::POST, &path)).await
    }

    /// POST /api/game/equip/{item_id}.
    pub async fn equip(&self, item_id: &str) -> Result<InventoryItem, ClientError> {
        let path = format!("/api/game/equip/{item_id}");
        self.execute(self.request(Method::POST, &path)).await
    }

    // -----------------------------------------------------------------------
    // Crafting / activities
    // -----------------------------------------------------------------------

    /// GET /api/game/recipes.
    pub async fn recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/recipes"))
            .await
    }

    /// POST /api/game/craft/{recipe_id}.
    pub async fn craft(&self, recipe_id: &str) -> Result<InventoryItem, ClientError> {
        let path = format!("/api/game/craft/{recipe_id}");
        self.execute(self.request(Method::POST, &path)).await
    }

    /// POST /api/game/daily-checkin.
    pub async fn daily_checkin(&self) -> Result<CheckinResponse, ClientError> {
        self.execute(self.request(Method::POST, "/api/game/daily-checkin"))
            .await
    }

    /// POST /api/game/hunt.
    pub async fn hunt(&self) -> Result<HuntResponse, ClientError> {
        self.execute(self.request(Method::POST, "/api/game/hunt"))
            .await
    }

    // -----------------------------------------------------------------------
    // Mail / quests / chat / leaderboard / ledger
    // -----------------------------------------------------------------------

    /// GET /api/game/mail.
    pub async fn mail(&self) -> Result<Vec<Mail>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/mail"))
            .await
    }

    /// POST /api/game/mail/claim/{id}.
    pub async fn claim_mail(&self, mail_id: i64) -> Result<ClaimRewardResponse, ClientError> {
        let path = format!("/api/game/mail/claim/{mail_id}");
        self.execute(self.request(Method::POST, &path)).await
    }

    /// GET /api/game/my-quests.
    pub async fn my_quests(&self) -> Result<Vec<QuestView>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/my-quests"))
            .await
    }

    /// POST /api/game/quests/claim/{quest_id}.
    pub async fn claim_quest(&self, quest_id: &str) -> Result<ClaimRewardResponse, ClientError> {
        let path = format!("/api/game/quests/claim/{quest_id}");
        self.execute(self.request(Method::POST, &path)).await
    }

    /// GET /api/game/chat.
    pub async fn chat(&self) -> Result<Vec<ChatMessage>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/chat"))
            .await
    }

    /// POST /api/game/chat.
    pub async fn send_chat(&self, message: &str) -> Result<ChatMessage, ClientError> {
        let body = json!({ "message": message });
        self.execute(self.request(Method::POST, "/api/game/chat").json(&body))
            .await
    }

    /// GET /api/game/leaderboard.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/leaderboard"))
            .await
    }

    /// GET /api/game/transactions/my.
    pub async fn my_transactions(&self) -> Result<Vec<TransactionEntry>, ClientError> {
        self.execute(self.request(Method::GET, "/api/game/transactions/my"))
            .await
    }

    /// GET /health (public).
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.execute(self.request(Method::GET, "/health")).await
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(character_id) = self.character_id {
            builder = builder.header(CHARACTER_HEADER, character_id.to_string());
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Turn non-success statuses into [`ClientError`]s, surfacing the
    /// server's `message` when it sent one.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("bearer token rejected, session expired");
            return Err(ClientError::SessionExpired);
        }

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => extract_message(&body)
                .unwrap_or_else(|| format!("Request failed with status {status}")),
            Err(_) => format!("Request failed with status {status}"),
        };
        tracing::debug!(%status, %message, "request rejected by server");
        Err(ClientError::Api { status, message })
    }
}

/// Pull the `message` field out of an error body, matching the key
/// case-insensitively.
fn extract_message(body: &serde_json::Value) -> Option<String> {
    let map = body.as_object()?;
    map.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("message"))
        .and_then(|(_, value)| value.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowercase_message() {
        let body = json!({ "message": "Quantity must be positive" });
        assert_eq!(
            extract_message(&body).as_deref(),
            Some("Quantity must be positive")
        );
    }

    #[test]
    fn extracts_capitalized_message() {
        let body = json!({ "Message": "Insufficient gold" });
        assert_eq!(extract_message(&body).as_deref(), Some("Insufficient gold"));
    }

    #[test]
    fn missing_message_is_none() {
        assert!(extract_message(&json!({ "error": "nope" })).is_none());
        assert!(extract_message(&json!("bare string")).is_none());
    }

    #[test]
    fn request_attaches_session_headers() {
        let mut client = ApiClient::new("http://localhost:3000");
        client.set_token("tok123");
        client.set_character(7);

        let request = client
            .request(Method::GET, "/api/game/profile/me")
            .build()
            .expect("request should build");

        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/api/game/profile/me"
        );
        assert_eq!(
            request.headers()["authorization"].to_str().unwrap(),
            "Bearer tok123"
        );
        assert_eq!(request.headers()[CHARACTER_HEADER], "7");
    }

    #[test]
    fn request_omits_headers_without_session() {
        let client = ApiClient::new("http://localhost:3000");
        let request = client
            .request(Method::GET, "/health")
            .build()
            .expect("request should build");

        assert!(!request.headers().contains_key("authorization"));
        assert!(!request.headers().contains_key(CHARACTER_HEADER));
    }
}
