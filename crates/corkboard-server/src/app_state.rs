// ABOUTME: Shared application state for the corkboard HTTP server.
// ABOUTME: Wraps the read-only FixtureStore so handlers reach data through State.

use std::sync::Arc;

use corkboard_core::FixtureStore;

/// Shared application state accessible by all Axum handlers. Holds the
/// fixture store built once at startup; handlers only ever read from it.
pub struct AppState {
    pub store: FixtureStore,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState around the given store.
    pub fn new(store: FixtureStore) -> Self {
        Self { store }
    }
}
