use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Token must not be empty")]
    EmptyToken,
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("Invalid room ID: {0}")]
    InvalidRoomId(String),
    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),
    #[error("Invalid homeserver URL: {0}")]
    InvalidHomeserverUrl(String),
}
