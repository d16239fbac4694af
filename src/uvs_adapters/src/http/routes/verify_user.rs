use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;
use uvs_application::{VerifyUserCommand, VerifyUserUseCase};
use uvs_core::{HomeserverDiscovery, IdentityProvider, VerificationResult};

use super::error::VerifyApiError;
use crate::http::authorization_header;

#[derive(Debug, Deserialize)]
pub struct VerifyUserRequest {
    pub token: Secret<String>,
    #[serde(default)]
    pub matrix_server_name: Option<String>,
}

#[tracing::instrument(name = "Verify User", skip_all)]
pub async fn verify_user<P, D>(
    State(use_case): State<VerifyUserUseCase<P, D>>,
    headers: HeaderMap,
    payload: Result<Json<VerifyUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, VerifyApiError>
where
    P: IdentityProvider + Clone + 'static,
    D: HomeserverDiscovery + Clone + 'static,
{
    let authorization = authorization_header(&headers);
    let rejected = |e| VerifyApiError::from_verification(e, VerificationResult::unverified());

    // The caller is checked before the body is looked at.
    use_case.admit(authorization).map_err(rejected)?;
    let Json(request) = payload?;

    let command = VerifyUserCommand {
        token: request.token,
        matrix_server_name: request.matrix_server_name,
    };

    let result = use_case
        .execute(authorization, command)
        .await
        .map_err(rejected)?;

    Ok(Json(result))
}
