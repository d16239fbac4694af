use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    homeserver_url::HomeserverUrl, open_id_token::OpenIdToken, room_id::RoomId, user_id::UserId,
};

/// Why a call to a homeserver did not produce a usable answer.
///
/// Callers fold every variant into a negative verification result; the
/// variants exist so the difference between an outage and a rejected token
/// still shows up in the logs.
#[derive(Debug, Error)]
pub enum RemoteLookupError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Homeserver responded with status {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Body(String),
}

impl RemoteLookupError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteLookupError::Transport(_) => "transport",
            RemoteLookupError::Timeout => "timeout",
            RemoteLookupError::Status(_) => "status",
            RemoteLookupError::Body(_) => "body",
        }
    }
}

/// Port for the homeserver APIs this service introspects.
///
/// Each method issues exactly one outbound request and never retries.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an OpenID token to the user that requested it.
    async fn lookup_identity(
        &self,
        homeserver: &HomeserverUrl,
        token: &OpenIdToken,
    ) -> Result<UserId, RemoteLookupError>;

    /// List the current members of a room.
    async fn lookup_members(
        &self,
        homeserver: &HomeserverUrl,
        room_id: &RoomId,
    ) -> Result<Vec<String>, RemoteLookupError>;
}
