use secrecy::Secret;
use uvs_core::{HomeserverDiscovery, IdentityProvider, OpenIdToken, VerificationResult};

use super::{VerificationError, admit, identify, resolve_homeserver};
use crate::{caller_gate::CallerGate, homeserver_resolver::HomeserverResolver};

/// Input for [`VerifyUserUseCase`], as received from the caller.
#[derive(Debug)]
pub struct VerifyUserCommand {
    pub token: Secret<String>,
    pub matrix_server_name: Option<String>,
}

/// Verify use case - checks that an OpenID token belongs to a real user
#[derive(Clone)]
pub struct VerifyUserUseCase<P, D> {
    gate: CallerGate,
    resolver: HomeserverResolver<D>,
    provider: P,
}

impl<P, D> VerifyUserUseCase<P, D>
where
    P: IdentityProvider,
    D: HomeserverDiscovery,
{
    pub fn new(gate: CallerGate, resolver: HomeserverResolver<D>, provider: P) -> Self {
        Self {
            gate,
            resolver,
            provider,
        }
    }

    /// Check the caller alone, before the request body is even read.
    pub fn admit(&self, authorization: Option<&str>) -> Result<(), VerificationError> {
        admit(&self.gate, authorization)
    }

    /// Execute the user verification use case
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header of the inbound request
    /// * `command` - Token to verify and, in multi-homeserver mode, its server name
    ///
    /// # Returns
    /// The verification result, or VerificationError when the caller is not
    /// admitted or the input is unusable. Remote failures yield an
    /// unverified result.
    #[tracing::instrument(name = "VerifyUserUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        authorization: Option<&str>,
        command: VerifyUserCommand,
    ) -> Result<VerificationResult, VerificationError> {
        admit(&self.gate, authorization)?;

        let token = OpenIdToken::try_from(command.token)?;

        let Some(homeserver) =
            resolve_homeserver(&self.resolver, command.matrix_server_name.as_deref()).await?
        else {
            return Ok(VerificationResult::unverified());
        };

        let result = match identify(&self.provider, &homeserver, &token).await {
            Some(user_id) => VerificationResult::verified(user_id),
            None => VerificationResult::unverified(),
        };

        tracing::info!(user_verified = result.user_verified(), "User verification finished");
        Ok(result)
    }
}
