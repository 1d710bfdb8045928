//! locate-server: an HTTP front end for the `locate` filesystem index
//!
//! Query-string parameters are translated into a `locate` invocation and
//! the matching paths are returned as a JSON array.

pub mod config;
pub mod locate;
pub mod query;
pub mod web;

pub use config::Settings;
pub use locate::{LocateCommand, LocateError, Locator, ResultSet};
pub use query::{LocateQuery, Pattern};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
