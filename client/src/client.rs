//! HTTP client for querying the accounts service.

use serde::Deserialize;
use std::time::Duration;
use veritier_types::{Label, UserInfo};

use crate::error::ClientError;

/// Default timeout for accounts service requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the accounts service REST endpoints.
///
/// The API contract: `GET /users/{uid}` returns the user snapshot and
/// `GET /users/{uid}/labels` returns the label list (possibly empty).
pub struct AccountsClient {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    base_url: String,
}

/// Raw user payload from the accounts service.
#[derive(Debug, Deserialize)]
struct UserResponse {
    uid: String,
    email: String,
    #[serde(default)]
    level: u32,
}

impl AccountsClient {
    /// Create a new client with default timeout settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the current snapshot of a user.
    ///
    /// `GET {base}/users/{uid}` -> UserInfo
    pub async fn fetch_user(&self, uid: &str) -> Result<UserInfo, ClientError> {
        let url = format!("{}/users/{}", self.base_url.trim_end_matches('/'), uid);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::UserNotFound(uid.to_string()));
        }
        if !response.status().is_success() {
            return Err(ClientError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let user: UserResponse = response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("failed to parse user response: {e}"))
        })?;

        Ok(UserInfo {
            uid: user.uid,
            email: user.email,
            level: user.level,
        })
    }

    /// Fetch a user's label snapshot.
    ///
    /// `GET {base}/users/{uid}/labels` -> Vec<Label>
    ///
    /// An empty JSON array is a valid response and yields an empty list.
    pub async fn fetch_labels(&self, uid: &str) -> Result<Vec<Label>, ClientError> {
        let url = format!(
            "{}/users/{}/labels",
            self.base_url.trim_end_matches('/'),
            uid
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(ClientError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("failed to parse label response: {e}"))
        })
    }
}

/// Map a reqwest send error onto the client error taxonomy.
fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ClientError::Unreachable(format!("connection failed: {e}"))
    } else {
        ClientError::RequestFailed(e.to_string())
    }
}
