use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{homeserver_url::HomeserverUrl, server_name::ServerName};

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Homeserver address {0} is not allowed")]
    ForbiddenAddress(String),
    #[error("Could not build homeserver URL: {0}")]
    InvalidUrl(String),
}

/// Port that turns a Matrix server name into the base URL to query.
#[async_trait]
pub trait HomeserverDiscovery: Send + Sync {
    async fn discover(&self, server_name: &ServerName) -> Result<HomeserverUrl, DiscoveryError>;
}
