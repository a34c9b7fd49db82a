// src/routes/mod.rs
pub mod chat;
pub mod email;
pub mod pages;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::state::SharedState;
use chat::{analyze_letter_handler, chat_handler};
use email::send_email_handler;

pub fn create_router(site: &SiteConfig) -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/send-email", post(send_email_handler))
        .route("/analyze-letter", post(analyze_letter_handler));

    pages::page_routes(&site.templates_dir)
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&site.static_dir))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Unwrap a JSON body, turning axum's rejection into our JSON error shape.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
