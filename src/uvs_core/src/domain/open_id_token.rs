use secrecy::{ExposeSecret, Secret};

use super::error::DomainError;

/// Short-lived OpenID token a client obtained from its homeserver.
///
/// The value is opaque to this service and only ever forwarded to the
/// homeserver's user-info endpoint, so it is kept behind `Secret` to stay out
/// of logs and debug output.
#[derive(Debug, Clone)]
pub struct OpenIdToken(Secret<String>);

impl TryFrom<Secret<String>> for OpenIdToken {
    type Error = DomainError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(DomainError::EmptyToken);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for OpenIdToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
