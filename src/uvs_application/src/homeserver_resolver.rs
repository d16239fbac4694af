use thiserror::Error;
use uvs_core::{DiscoveryError, DomainError, HomeserverDiscovery, HomeserverUrl, ServerName};

/// Which homeserver(s) verification requests are answered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeserverMode {
    /// Every request goes to one statically configured homeserver.
    Single(HomeserverUrl),
    /// Each request names its homeserver via `matrix_server_name`.
    Multi,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("matrix_server_name is required")]
    MissingServerName,
    #[error(transparent)]
    InvalidServerName(#[from] DomainError),
    #[error("Homeserver discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),
}

impl ResolveError {
    /// Whether the failure is the caller's fault rather than the remote side's.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ResolveError::MissingServerName | ResolveError::InvalidServerName(_)
        )
    }
}

#[derive(Clone)]
pub struct HomeserverResolver<D> {
    mode: HomeserverMode,
    discovery: D,
}

impl<D> HomeserverResolver<D>
where
    D: HomeserverDiscovery,
{
    pub fn new(mode: HomeserverMode, discovery: D) -> Self {
        Self { mode, discovery }
    }

    pub fn mode(&self) -> &HomeserverMode {
        &self.mode
    }

    /// Pick the base URL for one request.
    ///
    /// In single mode the server name is ignored entirely, even when present.
    #[tracing::instrument(name = "HomeserverResolver::resolve", skip(self))]
    pub async fn resolve(&self, server_name: Option<&str>) -> Result<HomeserverUrl, ResolveError> {
        match &self.mode {
            HomeserverMode::Single(url) => Ok(url.clone()),
            HomeserverMode::Multi => {
                let server_name = server_name
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or(ResolveError::MissingServerName)?;
                let server_name = ServerName::parse(server_name)?;

                Ok(self.discovery.discover(&server_name).await?)
            }
        }
    }
}
