//! Role handlers

mod handler;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Role routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_roles))
        .route("/{id}", get(handler::get_role))
}
