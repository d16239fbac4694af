use std::{
    fmt,
    net::{IpAddr, Ipv6Addr},
    sync::LazyLock,
};

use regex::Regex;

use super::error::DomainError;

static SERVER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<host>\[[0-9A-Fa-f:.]{2,45}\]|[A-Za-z0-9][A-Za-z0-9.\-]{0,254})(?::(?P<port>[0-9]{1,5}))?$",
    )
    .expect("server name regex is valid")
});

/// Matrix server name: `host[:port]` where host is a DNS name, an IPv4
/// literal or a bracketed IPv6 literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerName {
    raw: String,
    host_len: usize,
    port: Option<u16>,
}

impl ServerName {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let invalid = || DomainError::InvalidServerName(raw.clone());

        let captures = SERVER_NAME_REGEX.captures(&raw).ok_or_else(invalid)?;
        let host = captures.name("host").ok_or_else(invalid)?.as_str();

        if let Some(literal) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            literal.parse::<Ipv6Addr>().map_err(|_| invalid())?;
        }

        let port = match captures.name("port") {
            Some(port) => Some(port.as_str().parse::<u16>().map_err(|_| invalid())?),
            None => None,
        };

        Ok(Self {
            host_len: host.len(),
            raw,
            port,
        })
    }

    /// Host part, IPv6 literals keep their brackets.
    pub fn host(&self) -> &str {
        &self.raw[..self.host_len]
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The host as an IP address when it is an IP literal.
    pub fn ip(&self) -> Option<IpAddr> {
        let host = self.host();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        host.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
