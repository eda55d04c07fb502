//! HTTP service exposing path queries over uploaded or generated graphs

pub mod api;
pub mod models;
pub mod server;

pub use api::{create_router, AppState};
pub use server::{start_server, ServerConfig};
