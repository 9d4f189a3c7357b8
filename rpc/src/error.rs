//! RPC error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use veritier_client::ClientError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("accounts service error: {0}")]
    Upstream(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<ClientError> for RpcError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::UserNotFound(uid) => RpcError::UserNotFound(uid),
            other => RpcError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = match &self {
            RpcError::UserNotFound(_) => StatusCode::NOT_FOUND,
            RpcError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
