// ABOUTME: List read handlers, symmetric to the card handlers.
// ABOUTME: Lists carry cardIds references that are never integrity-checked.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corkboard_core::List;

use crate::app_state::SharedState;

/// GET /list - All lists, in insertion order.
pub async fn list_lists(State(state): State<SharedState>) -> Json<Vec<List>> {
    Json(state.store.lists().to_vec())
}

/// GET /list/{id} - A single list by id, or a plain-text 404.
pub async fn get_list(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match state.store.list(&id) {
        Some(list) => Json(list.clone()).into_response(),
        None => {
            tracing::error!("list with id {} not found (path: /list/{})", id, id);
            (StatusCode::NOT_FOUND, "List Not Found").into_response()
        }
    }
}
