use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use uvs_core::{HomeserverUrl, IdentityProvider, OpenIdToken, RemoteLookupError, RoomId, UserId};

const USERINFO_PATH: [&str; 5] = ["_matrix", "federation", "v1", "openid", "userinfo"];

/// Remote identity client for Synapse homeservers.
///
/// Uses the federation OpenID user-info endpoint for identity lookups and the
/// Synapse admin API for room members. Timeouts come from the `Client`.
#[derive(Clone)]
pub struct SynapseClient {
    http_client: Client,
    admin_token: Option<Secret<String>>,
}

impl SynapseClient {
    pub fn new(http_client: Client, admin_token: Option<Secret<String>>) -> Self {
        let admin_token = admin_token.filter(|t| !t.expose_secret().is_empty());
        Self {
            http_client,
            admin_token,
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SynapseClient {
    #[tracing::instrument(name = "Looking up OpenID user info", skip_all)]
    async fn lookup_identity(
        &self,
        homeserver: &HomeserverUrl,
        token: &OpenIdToken,
    ) -> Result<UserId, RemoteLookupError> {
        let url = homeserver.join_segments(USERINFO_PATH);

        let response = self
            .http_client
            .get(url)
            .query(&[("access_token", token.as_ref().expose_secret())])
            .send()
            .await
            .map_err(transport_error)?;

        let body: UserInfoResponse = check_status(response)?
            .json()
            .await
            .map_err(body_error)?;

        UserId::parse(body.sub).map_err(|e| RemoteLookupError::Body(e.to_string()))
    }

    #[tracing::instrument(name = "Looking up room members", skip_all, fields(room_id = %room_id))]
    async fn lookup_members(
        &self,
        homeserver: &HomeserverUrl,
        room_id: &RoomId,
    ) -> Result<Vec<String>, RemoteLookupError> {
        let url = homeserver.join_segments([
            "_synapse",
            "admin",
            "v1",
            "rooms",
            room_id.as_str(),
            "members",
        ]);

        let mut request = self.http_client.get(url);
        if let Some(admin_token) = &self.admin_token {
            request = request.bearer_auth(admin_token.expose_secret());
        }

        let response = request.send().await.map_err(transport_error)?;

        let body: RoomMembersResponse = check_status(response)?
            .json()
            .await
            .map_err(body_error)?;

        Ok(body.members)
    }
}

fn check_status(response: Response) -> Result<Response, RemoteLookupError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteLookupError::Status(status.as_u16()));
    }
    Ok(response)
}

// The request URL carries the OpenID token, keep it out of error messages.
fn transport_error(error: reqwest::Error) -> RemoteLookupError {
    if error.is_timeout() {
        return RemoteLookupError::Timeout;
    }
    RemoteLookupError::Transport(error.without_url().to_string())
}

fn body_error(error: reqwest::Error) -> RemoteLookupError {
    if error.is_timeout() {
        return RemoteLookupError::Timeout;
    }
    RemoteLookupError::Body(error.without_url().to_string())
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
}

#[derive(Debug, Deserialize)]
struct RoomMembersResponse {
    members: Vec<String>,
}
