use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Missing authorization header")]
    MissingCredentials,
    #[error("Authorization header is not a bearer token")]
    UnsupportedScheme,
    #[error("Invalid bearer token")]
    InvalidCredentials,
}

/// Decides whether a caller may use the verification endpoints at all.
///
/// Independent of the end-user token being verified: this checks the static
/// shared secret that this service's own clients present as
/// `Authorization: Bearer <secret>`. Without a configured secret every caller
/// is admitted.
#[derive(Clone, Default)]
pub struct CallerGate {
    shared_secret: Option<Secret<String>>,
}

impl CallerGate {
    pub fn new(shared_secret: Option<Secret<String>>) -> Self {
        let shared_secret = shared_secret.filter(|s| !s.expose_secret().is_empty());
        Self { shared_secret }
    }

    pub fn is_enabled(&self) -> bool {
        self.shared_secret.is_some()
    }

    /// Check the raw `Authorization` header value of an inbound request.
    pub fn admit(&self, authorization: Option<&str>) -> Result<(), GateError> {
        let Some(secret) = &self.shared_secret else {
            return Ok(());
        };

        let header = authorization.ok_or(GateError::MissingCredentials)?;
        let presented = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(GateError::UnsupportedScheme)?;

        let matches: bool = presented
            .as_bytes()
            .ct_eq(secret.expose_secret().as_bytes())
            .into();

        if !matches {
            return Err(GateError::InvalidCredentials);
        }
        Ok(())
    }
}
