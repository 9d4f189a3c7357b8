use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("HTTP request to accounts service failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from accounts service: {0}")]
    InvalidResponse(String),

    #[error("accounts service unreachable: {0}")]
    Unreachable(String),
}
