//! Application state shared across handlers

use crate::config::Settings;
use crate::locate::{LocateCommand, Locator};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Settings, fixed before the server starts
    pub settings: Arc<Settings>,
    /// Backend answering locate queries
    pub locator: Arc<dyn Locator>,
}

impl AppState {
    /// Create state backed by the configured locate command
    pub fn new(settings: Settings) -> Self {
        let locator = LocateCommand::with_settings(&settings.locate);
        Self::with_locator(settings, Arc::new(locator))
    }

    /// Create state with a custom locator
    pub fn with_locator(settings: Settings, locator: Arc<dyn Locator>) -> Self {
        Self {
            settings: Arc::new(settings),
            locator,
        }
    }
}
