// ABOUTME: Core library for corkboard, containing the Card and List domain types.
// ABOUTME: Also provides the FixtureStore, the read-only in-memory data source.

pub mod model;
pub mod store;

pub use model::{Card, List};
pub use store::FixtureStore;
