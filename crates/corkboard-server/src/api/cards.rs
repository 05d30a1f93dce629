// ABOUTME: Card read handlers: the full collection and single-card lookup.
// ABOUTME: Not-found is a normal branch here, surfaced as a plain-text 404.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corkboard_core::Card;

use crate::app_state::SharedState;

/// GET /card - All cards, unfiltered and unpaginated, in insertion order.
pub async fn list_cards(State(state): State<SharedState>) -> Json<Vec<Card>> {
    Json(state.store.cards().to_vec())
}

/// GET /card/{id} - A single card by id, or a plain-text 404.
pub async fn get_card(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match state.store.card(&id) {
        Some(card) => Json(card.clone()).into_response(),
        None => {
            tracing::error!("card with id {} not found (path: /card/{})", id, id);
            (StatusCode::NOT_FOUND, "Card Not Found").into_response()
        }
    }
}
