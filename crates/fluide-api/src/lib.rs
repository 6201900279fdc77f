//! Album command dispatcher and HTTP server.
//!
//! This crate provides:
//! - The command dispatcher (create-empty-album, get-albums, upload-to-album)
//! - REST and command-envelope routes over Axum
//! - Request ID, logging and CORS middleware
//! - Prometheus metrics

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use dispatcher::{Command, Dispatcher, Reply};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
