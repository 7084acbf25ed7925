use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Message shown to the viewer when the credential pair is not recognised.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Try the demo accounts below.";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            ServiceError::Unauthenticated => HttpError::Unauthorized("Not signed in".to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
