use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uvs_application::VerificationError;
use uvs_core::VerificationResult;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum VerifyApiError {
    /// Answered with the endpoint's normal negative result, not an error body.
    #[error("Caller is not authorized: {reason}")]
    Unauthorized {
        reason: String,
        result: VerificationResult,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Body could not be read as the endpoint's JSON request, after the caller was admitted.
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),
}

impl VerifyApiError {
    /// Map a use case error, using `negative` as the 403 body.
    pub fn from_verification(error: VerificationError, negative: VerificationResult) -> Self {
        match error {
            VerificationError::Unauthorized(e) => VerifyApiError::Unauthorized {
                reason: e.to_string(),
                result: negative,
            },
            VerificationError::InvalidInput(e) => VerifyApiError::InvalidInput(e),
        }
    }
}

impl IntoResponse for VerifyApiError {
    fn into_response(self) -> Response {
        match self {
            VerifyApiError::Unauthorized { result, .. } => {
                (StatusCode::FORBIDDEN, Json(result)).into_response()
            }
            VerifyApiError::InvalidInput(_) => {
                let body = Json(ErrorResponse {
                    error: self.to_string(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            VerifyApiError::MalformedBody(rejection) => rejection.into_response(),
        }
    }
}
