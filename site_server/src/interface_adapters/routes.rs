use axum::{routing::get, Router};

use crate::interface_adapters::handlers::{
    create_guest, get_content, get_guest, list_guests, update_guest,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/api/content", get(get_content))
        .route("/api/guests", get(list_guests).post(create_guest))
        .route("/api/guests/{id}", get(get_guest).put(update_guest))
        .with_state(state)
}
