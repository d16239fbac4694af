use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use reqwest::{Client, ClientBuilder, redirect::Policy};
use serde::Deserialize;
use uvs_core::{DiscoveryError, HomeserverDiscovery, HomeserverUrl, ServerName};

const DEFAULT_FEDERATION_PORT: u16 = 8448;
const WELL_KNOWN_PATH: &str = "/.well-known/matrix/server";

/// Resolves server names through `/.well-known/matrix/server` delegation.
///
/// Resolution order:
/// 1. IP literals and names with an explicit port are used as-is.
/// 2. Otherwise the well-known document is fetched and its `m.server` value
///    is used when valid.
/// 3. Otherwise the server name itself is used.
///
/// A missing port defaults to 8448. SRV records are not consulted.
#[derive(Clone)]
pub struct WellKnownDiscovery {
    http_client: Client,
    allow_private_addresses: bool,
    scheme: &'static str,
}

impl WellKnownDiscovery {
    /// Builder for the client passed to [`WellKnownDiscovery::new`].
    ///
    /// Redirects are not followed: a delegation server could otherwise send
    /// the fetch to an address the blacklist refuses.
    pub fn http_client_builder() -> ClientBuilder {
        Client::builder().redirect(Policy::none())
    }

    pub fn new(http_client: Client, allow_private_addresses: bool) -> Self {
        Self {
            http_client,
            allow_private_addresses,
            scheme: "https",
        }
    }

    /// Talk plain HTTP to discovered servers. Only useful against test homeservers.
    pub fn with_plain_http(mut self) -> Self {
        self.scheme = "http";
        self
    }

    #[tracing::instrument(name = "Fetching well-known delegation", skip(self))]
    async fn fetch_delegation(&self, server_name: &ServerName) -> Option<ServerName> {
        let url = format!("{}://{}{}", self.scheme, server_name, WELL_KNOWN_PATH);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "No well-known delegation");
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Well-known request failed");
                return None;
            }
        };

        let document: WellKnownServer = match response.json().await {
            Ok(document) => document,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed well-known document");
                return None;
            }
        };

        match ServerName::parse(document.server) {
            Ok(delegated) => Some(delegated),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid m.server value");
                None
            }
        }
    }

    fn check_address(&self, server_name: &ServerName) -> Result<(), DiscoveryError> {
        if self.allow_private_addresses {
            return Ok(());
        }
        match server_name.ip() {
            Some(ip) if is_forbidden(ip) => {
                Err(DiscoveryError::ForbiddenAddress(server_name.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl HomeserverDiscovery for WellKnownDiscovery {
    #[tracing::instrument(name = "Discovering homeserver", skip_all, fields(server_name = %server_name))]
    async fn discover(&self, server_name: &ServerName) -> Result<HomeserverUrl, DiscoveryError> {
        self.check_address(server_name)?;

        let target = if server_name.ip().is_some() || server_name.port().is_some() {
            server_name.clone()
        } else {
            match self.fetch_delegation(server_name).await {
                Some(delegated) => {
                    self.check_address(&delegated)?;
                    delegated
                }
                None => server_name.clone(),
            }
        };

        let port = target.port().unwrap_or(DEFAULT_FEDERATION_PORT);
        let url = format!("{}://{}:{}", self.scheme, target.host(), port);

        let homeserver =
            HomeserverUrl::parse(&url).map_err(|e| DiscoveryError::InvalidUrl(e.to_string()))?;
        tracing::debug!(homeserver = %homeserver, "Discovered homeserver");
        Ok(homeserver)
    }
}

#[derive(Debug, Deserialize)]
struct WellKnownServer {
    #[serde(rename = "m.server")]
    server: String,
}

fn is_forbidden(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => is_forbidden_v4(ip),
        IpAddr::V6(ip) => match ip.to_ipv4_mapped() {
            Some(mapped) => is_forbidden_v4(mapped),
            None => is_forbidden_v6(ip),
        },
    }
}

fn is_forbidden_v4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation()
        || ip.is_multicast()
        // shared address space, 100.64.0.0/10
        || (a == 100 && (b & 0b1100_0000) == 0b0100_0000)
}

fn is_forbidden_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        || ip.is_multicast()
        // unique local, fc00::/7
        || (first & 0xfe00) == 0xfc00
        // link local, fe80::/10
        || (first & 0xffc0) == 0xfe80
        // documentation, 2001:db8::/32
        || (first == 0x2001 && ip.segments()[1] == 0x0db8)
}
