//! Subprocess execution of the locate command

use super::models::{parse_output, ResultSet};
use crate::config::LocateSettings;
use crate::query::{LocateQuery, Pattern};
use async_trait::async_trait;
use std::process::ExitStatus;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Failure to produce a result set
#[derive(Debug, Error)]
pub enum LocateError {
    /// The command could not be started or its output could not be read
    #[error("failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The command ran but did not exit successfully
    #[error("{command} exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Something that can answer a locate query
#[async_trait]
pub trait Locator: Send + Sync {
    async fn locate(&self, query: &LocateQuery) -> Result<ResultSet, LocateError>;
}

/// Runs the external locate program
#[derive(Debug, Clone)]
pub struct LocateCommand {
    program: String,
}

impl LocateCommand {
    /// Create a runner for `program`, resolved through PATH
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn with_settings(settings: &LocateSettings) -> Self {
        Self::new(settings.command.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program for `query`
    pub fn args(query: &LocateQuery) -> Vec<String> {
        let mut args = vec!["--null".to_string()];
        if query.case_insensitive {
            args.push("--ignore-case".to_string());
        }
        match query.pattern {
            Pattern::Literal(ref pattern) => {
                args.push("--".to_string());
                args.push(pattern.clone());
            }
            Pattern::Regex(ref regex) => {
                args.push("--regex".to_string());
                args.push("--".to_string());
                args.push(regex.as_str().to_string());
            }
        }
        args
    }
}

#[async_trait]
impl Locator for LocateCommand {
    async fn locate(&self, query: &LocateQuery) -> Result<ResultSet, LocateError> {
        let args = Self::args(query);
        debug!("Running {} {:?}", self.program, args);

        let start = Instant::now();
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|source| LocateError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(LocateError::Exit {
                command: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        let results = parse_output(&output.stdout);
        debug!(
            "{} returned {} entries in {:?}",
            self.program,
            results.len(),
            start.elapsed()
        );
        Ok(results)
    }
}
