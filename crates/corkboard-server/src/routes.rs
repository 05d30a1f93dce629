// ABOUTME: Route definitions and pipeline assembly for the corkboard HTTP API.
// ABOUTME: Orders the middleware: trace, security headers, CORS, auth, shield, dispatch.

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::app_state::SharedState;
use crate::auth::AuthLayer;
use crate::config::{DeployMode, ServerConfig};
use crate::error;

/// Build the complete Axum router with all routes, middleware, and shared state.
///
/// Layers run top-down per request: access logging, security headers, CORS,
/// the auth gate, then dispatch. The panic shield sits just outside the
/// routes so its 500s still pick up the hardening headers on the way out,
/// and the auth gate rejects before any handler can run.
pub fn create_router(state: SharedState, config: &ServerConfig) -> Router {
    let mode = config.mode;

    // Terse access logs in production, verbose elsewhere.
    let (make_span, on_response) = match mode {
        DeployMode::Production => (
            DefaultMakeSpan::new().level(Level::INFO),
            DefaultOnResponse::new().level(Level::INFO),
        ),
        DeployMode::Development => (
            DefaultMakeSpan::new()
                .level(Level::DEBUG)
                .include_headers(true),
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .include_headers(true),
        ),
    };

    Router::new()
        .route("/", get(index))
        .route("/card", get(api::cards::list_cards))
        .route("/card/{id}", get(api::cards::get_card))
        .route("/list", get(api::lists::list_lists))
        .route("/list/{id}", get(api::lists::get_list))
        .layer(CatchPanicLayer::custom(move |err| {
            error::handle_panic(mode, err)
        }))
        .layer(AuthLayer::new(config.api_token.clone()))
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span)
                .on_response(on_response),
        )
        .with_state(state)
}

/// GET / - Liveness greeting. Sits behind the auth gate like every route.
async fn index() -> &'static str {
    "Hello, world!"
}
