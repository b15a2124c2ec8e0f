//! Database access layer

pub mod models;
pub mod repository;
