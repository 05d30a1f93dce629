// ABOUTME: API module containing the HTTP handler functions for the corkboard endpoints.
// ABOUTME: Organized into sub-modules for card reads and list reads.

pub mod cards;
pub mod lists;
