//! Locate invocation module
//!
//! Builds the command line for the external locate tool, runs it,
//! and normalizes its output into a [`ResultSet`].

mod executor;
mod models;

pub use executor::{LocateCommand, LocateError, Locator};
pub use models::*;
