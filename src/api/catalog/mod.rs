//! Catalog API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handler::list))
        .route("/catalog/{code}", get(handler::get_by_code))
}
