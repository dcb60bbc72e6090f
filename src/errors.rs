// src/errors.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Failures of the live directions lookup. Never leave the router: every
/// variant is answered with the fallback route.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("No usable directions credential configured")]
    MissingCredential,

    #[error("Directions request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Directions service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed directions response: {0}")]
    Malformed(String),

    #[error("Invalid directions URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Dashboard render failed: {0}")]
    RenderFailure(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::RenderFailure(_) | ServiceError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::BadRequest(msg) => {
                log::warn!("Rejected request: {}", msg);
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "error": msg })),
            ServiceError::RenderFailure(msg) => {
                log::error!("Dashboard render failed: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Dashboard crashed",
                    "detail": msg,
                }))
            }
            ServiceError::InternalError => HttpResponse::InternalServerError().finish(),
        }
    }
}
