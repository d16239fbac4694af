use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;
use uvs_application::{VerifyUserInRoomCommand, VerifyUserInRoomUseCase};
use uvs_core::{HomeserverDiscovery, IdentityProvider, VerificationResult};

use super::error::VerifyApiError;
use crate::http::authorization_header;

#[derive(Debug, Deserialize)]
pub struct VerifyUserInRoomRequest {
    pub token: Secret<String>,
    pub room_id: String,
    #[serde(default)]
    pub matrix_server_name: Option<String>,
}

#[tracing::instrument(name = "Verify User In Room", skip_all)]
pub async fn verify_user_in_room<P, D>(
    State(use_case): State<VerifyUserInRoomUseCase<P, D>>,
    headers: HeaderMap,
    payload: Result<Json<VerifyUserInRoomRequest>, JsonRejection>,
) -> Result<impl IntoResponse, VerifyApiError>
where
    P: IdentityProvider + Clone + 'static,
    D: HomeserverDiscovery + Clone + 'static,
{
    let authorization = authorization_header(&headers);
    let rejected =
        |e| VerifyApiError::from_verification(e, VerificationResult::unverified_in_room());

    // The caller is checked before the body is looked at.
    use_case.admit(authorization).map_err(rejected)?;
    let Json(request) = payload?;

    let command = VerifyUserInRoomCommand {
        token: request.token,
        room_id: request.room_id,
        matrix_server_name: request.matrix_server_name,
    };

    let result = use_case
        .execute(authorization, command)
        .await
        .map_err(rejected)?;

    Ok(Json(result))
}
