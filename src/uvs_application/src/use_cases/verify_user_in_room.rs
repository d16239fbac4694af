use secrecy::Secret;
use uvs_core::{HomeserverDiscovery, IdentityProvider, OpenIdToken, RoomId, VerificationResult};

use super::{VerificationError, admit, identify, resolve_homeserver};
use crate::{caller_gate::CallerGate, homeserver_resolver::HomeserverResolver};

/// Input for [`VerifyUserInRoomUseCase`], as received from the caller.
#[derive(Debug)]
pub struct VerifyUserInRoomCommand {
    pub token: Secret<String>,
    pub room_id: String,
    pub matrix_server_name: Option<String>,
}

/// Verifies a token and then checks the user is a member of a room.
///
/// The membership lookup only runs after the identity lookup succeeded, so a
/// request costs at most two outbound calls.
#[derive(Clone)]
pub struct VerifyUserInRoomUseCase<P, D> {
    gate: CallerGate,
    resolver: HomeserverResolver<D>,
    provider: P,
}

impl<P, D> VerifyUserInRoomUseCase<P, D>
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

    #[tracing::instrument(
        name = "VerifyUserInRoomUseCase::execute",
        skip_all,
        fields(room_id = %command.room_id)
    )]
    pub async fn execute(
        &self,
        authorization: Option<&str>,
        command: VerifyUserInRoomCommand,
    ) -> Result<VerificationResult, VerificationError> {
        admit(&self.gate, authorization)?;

        let token = OpenIdToken::try_from(command.token)?;
        let room_id = RoomId::parse(command.room_id)?;

        let Some(homeserver) =
            resolve_homeserver(&self.resolver, command.matrix_server_name.as_deref()).await?
        else {
            return Ok(VerificationResult::unverified_in_room());
        };

        let Some(user_id) = identify(&self.provider, &homeserver, &token).await else {
            return Ok(VerificationResult::unverified_in_room());
        };

        let is_member = match self.provider.lookup_members(&homeserver, &room_id).await {
            Ok(members) => members.iter().any(|member| member == user_id.as_str()),
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    error = %e,
                    homeserver = %homeserver,
                    "Room members lookup failed"
                );
                false
            }
        };

        tracing::info!(is_member, "Room membership verification finished");
        Ok(VerificationResult::verified_in_room(user_id, is_member))
    }
}
