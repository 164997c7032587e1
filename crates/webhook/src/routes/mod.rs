//! Route handlers for the webhook server.

pub mod callback;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/callback", post(callback::callback))
        .route("/health", get(health::health))
}
