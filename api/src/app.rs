//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ra_core::repositories::{TokenRepository, UserDirectory};
use ra_core::services::{Notifier, TokenService};

use crate::dto::{error_codes, ErrorResponse};
use crate::handlers::json_error_handler;
use crate::routes::tokens::{get_tokens, refresh_tokens};

/// Application state that holds shared services
pub struct AppState<R, N, D>
where
    R: TokenRepository,
    N: Notifier,
    D: UserDirectory,
{
    pub token_service: Arc<TokenService<R, N>>,
    pub user_directory: Arc<D>,
    /// Honour proxy headers when resolving the client address
    pub trust_proxy_headers: bool,
}

/// Create and configure the application with all dependencies
pub fn create_app<R, N, D>(
    app_state: web::Data<AppState<R, N, D>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: TokenRepository + 'static,
    N: Notifier + 'static,
    D: UserDirectory + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/tokens")
                .route("/get", web::post().to(get_tokens::<R, N, D>))
                .route("/refresh", web::post().to(refresh_tokens::<R, N, D>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rotauth-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
