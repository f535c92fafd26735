use actix_web::{web, HttpRequest, HttpResponse};

use ra_core::repositories::{TokenRepository, UserDirectory};
use ra_core::services::Notifier;

use crate::app::AppState;
use crate::dto::{RefreshTokensRequest, TokenPairResponse};
use crate::handlers::{client_ip, handle_domain_error};

/// Handler for POST /tokens/refresh
///
/// Exchanges an access/refresh pair for a new one. The presented refresh
/// token cannot be used again afterwards.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body
/// - 401 Unauthorized: Invalid access token, or invalid, expired or already used refresh token
/// - 500 Internal Server Error: Hashing or storage failure
pub async fn refresh_tokens<R, N, D>(
    req: HttpRequest,
    state: web::Data<AppState<R, N, D>>,
    request: web::Json<RefreshTokensRequest>,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    N: Notifier + 'static,
    D: UserDirectory + 'static,
{
    let ip = client_ip(&req, state.trust_proxy_headers);

    match state
        .token_service
        .refresh(&request.access_token, &request.refresh_token, &ip)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
