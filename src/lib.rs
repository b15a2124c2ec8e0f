//! catalog-server — product catalog HTTP service
//!
//! Layered read-mostly service:
//! - `api`: HTTP handlers (axum), query parsing and response shaping
//! - `db`: repositories translating operations into PostgreSQL queries
//! - `utils`: unified error/response types

pub mod api;
pub mod config;
pub mod db;
pub mod state;
pub mod utils;

pub use config::Config;
pub use state::AppState;
