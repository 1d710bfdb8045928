//! Configuration module for locate-server
//!
//! Settings are assembled once at startup from defaults, an optional YAML
//! file, environment variables and command line flags, then shared
//! read-only with the web layer.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "LOCATE_SERVER_SETTINGS_PATH";

/// Load settings from `explicit`, the settings path variable, or the
/// default search locations, falling back to built-in defaults.
///
/// Environment overrides are applied on top of whatever was loaded.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    load_with(explicit, |key| std::env::var(key).ok())
}

/// [`load`] with environment variables read through `lookup`
pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match find_settings_file(explicit, &lookup) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env_from(lookup);
    Ok(settings)
}

fn find_settings_file<F>(explicit: Option<&Path>, lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    // An explicit path is returned even when missing so the read error surfaces.
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = lookup(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("locate-server/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
