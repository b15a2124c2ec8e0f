//! Categories API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(handler::list).post(handler::create))
}
