// ABOUTME: HTTP server for corkboard, exposing read-only card and list endpoints.
// ABOUTME: Uses Axum with a fixed middleware pipeline: trace, headers, CORS, auth, shield.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, DeployMode, ServerConfig};
pub use routes::create_router;
