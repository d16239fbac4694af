pub mod verify_user;
pub mod verify_user_in_room;

use thiserror::Error;
use uvs_core::{
    DomainError, HomeserverDiscovery, HomeserverUrl, IdentityProvider, OpenIdToken, UserId,
};

use crate::{
    caller_gate::{CallerGate, GateError},
    homeserver_resolver::{HomeserverResolver, ResolveError},
};

/// Error types shared by the verification use cases.
///
/// Remote lookup failures are absent here: they end in a negative
/// result, not in an error.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Caller is not authorized: {0}")]
    Unauthorized(#[from] GateError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<DomainError> for VerificationError {
    fn from(error: DomainError) -> Self {
        VerificationError::InvalidInput(error.to_string())
    }
}

fn admit(gate: &CallerGate, authorization: Option<&str>) -> Result<(), VerificationError> {
    gate.admit(authorization).map_err(|e| {
        tracing::info!(reason = %e, "Rejected caller");
        VerificationError::from(e)
    })
}

/// `Ok(None)` means the homeserver could not be reached through discovery,
/// which callers report as an unverified user.
async fn resolve_homeserver<D>(
    resolver: &HomeserverResolver<D>,
    server_name: Option<&str>,
) -> Result<Option<HomeserverUrl>, VerificationError>
where
    D: HomeserverDiscovery,
{
    match resolver.resolve(server_name).await {
        Ok(url) => Ok(Some(url)),
        Err(e) if e.is_bad_request() => Err(VerificationError::InvalidInput(e.to_string())),
        Err(e) => {
            tracing::warn!(error = %e, "Could not resolve homeserver");
            Ok(None)
        }
    }
}

async fn identify<P>(provider: &P, homeserver: &HomeserverUrl, token: &OpenIdToken) -> Option<UserId>
where
    P: IdentityProvider,
{
    match provider.lookup_identity(homeserver, token).await {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!(
                kind = e.kind(),
                error = %e,
                homeserver = %homeserver,
                "OpenID user-info lookup failed"
            );
            None
        }
    }
}
