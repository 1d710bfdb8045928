//! Settings structures for locate-server configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "LOCATE_SERVER_PORT";
/// Environment variable overriding the listen address
pub const BIND_ADDRESS_ENV: &str = "LOCATE_SERVER_BIND_ADDRESS";
/// Environment variable overriding the locate executable
pub const COMMAND_ENV: &str = "LOCATE_SERVER_COMMAND";

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub locate: LocateSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge LOCATE_SERVER_* variables read through `lookup`; an unparsable
    /// port is ignored
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(PORT_ENV) {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup(BIND_ADDRESS_ENV) {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup(COMMAND_ENV) {
            self.locate.command = val;
        }
    }

    /// Apply command line flags, which take precedence over everything else
    pub fn apply_overrides(&mut self, port: Option<u16>, address: Option<String>) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(address) = address {
            self.server.bind_address = address;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address; empty listens on all interfaces
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: String::new(),
        }
    }
}

impl ServerSettings {
    /// Host part handed to the listener; an empty address binds IPv4 only
    pub fn bind_host(&self) -> &str {
        match self.bind_address.trim() {
            "" => "0.0.0.0",
            host => host,
        }
    }

    /// Printable listen address, e.g. `0.0.0.0:8080`
    pub fn listen_addr(&self) -> String {
        let host = self.bind_host();
        if host.contains(':') {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}

/// Settings for the external locate command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateSettings {
    /// Executable name or path, resolved through PATH
    pub command: String,
}

impl Default for LocateSettings {
    fn default() -> Self {
        Self {
            command: "locate".to_string(),
        }
    }
}
