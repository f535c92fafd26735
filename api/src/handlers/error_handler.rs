//! Mapping of domain errors and extractor failures to HTTP responses
//!
//! Authentication failures use one fixed message per token kind so that an
//! unknown id and a wrong secret look the same to the caller. Internal error
//! details are logged and never returned.

use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use tracing::{error, warn};

use ra_core::errors::DomainError;

use crate::dto::{error_codes, ErrorResponse};

pub const INVALID_USER_MESSAGE: &str = "invalid user id";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Convert a domain error into the response sent to the client
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message))
        }
        DomainError::UserNotFound => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::INVALID_USER, INVALID_USER_MESSAGE)),
        DomainError::Token(token_error) => {
            warn!("Authentication failed: {}", token_error);
            HttpResponse::Unauthorized()
                .json(ErrorResponse::new(error_codes::UNAUTHORIZED, token_error.to_string()))
        }
        DomainError::Internal { message } => {
            error!("Internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// `JsonConfig` error handler: every unreadable body becomes a 400
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));

    InternalError::from_response(err, response).into()
}
