use std::fmt;

use url::Url;

use super::error::DomainError;

/// Base URL of a homeserver's client/federation API, resolved once per
/// request and used for every remote call of that request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeserverUrl(Url);

impl HomeserverUrl {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let url = Url::parse(value.trim())
            .map_err(|e| DomainError::InvalidHomeserverUrl(format!("{value}: {e}")))?;
        Self::try_from(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub fn join_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl TryFrom<Url> for HomeserverUrl {
    type Error = DomainError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(DomainError::InvalidHomeserverUrl(url.to_string()));
        }
        if url.host().is_none() {
            return Err(DomainError::InvalidHomeserverUrl(url.to_string()));
        }
        Ok(Self(url))
    }
}

impl fmt::Display for HomeserverUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
