use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::{TokenRepository, UserDirectory};
use ra_core::services::Notifier;

use crate::app::AppState;
use crate::dto::{GetTokensRequest, TokenPairResponse};
use crate::handlers::{client_ip, handle_domain_error};

/// Handler for POST /tokens/get
///
/// Issues a fresh token pair for an existing user.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "6f1c2a8e-...-uuid"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body, malformed or unknown user id
/// - 500 Internal Server Error: Directory, hashing or storage failure
pub async fn get_tokens<R, N, D>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, D>>,
    request: web::Json<GetTokensRequest>,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    N: Notifier + 'static,
    D: UserDirectory + 'static,
{
    let user_id = match Uuid::parse_str(request.user_id.trim()) {
        Ok(id) => id,
        Err(e) => {
            debug!("Rejected malformed user id: {}", e);
            return handle_domain_error(DomainError::UserNotFound);
        }
    };

    match state.user_directory.exists(user_id).await {
        Ok(true) => {}
        Ok(false) => return handle_domain_error(DomainError::UserNotFound),
        Err(e) => return handle_domain_error(e),
    }

    let ip = client_ip(&req, state.trust_proxy_headers);

    match state.token_service.issue_pair(&ip, user_id).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
