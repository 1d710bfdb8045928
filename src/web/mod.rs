//! Web server module
//!
//! Provides the HTTP API for locate-server.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{create_router, LOCATE_PATH};
pub use state::AppState;
