//! Per-demo runtime configuration.
//!
//! # Responsibility
//! - Resolve log and data locations for one demo binary.
//!
//! # Invariants
//! - `log_dir` is always absolute (required by `init_logging`).
//! - Binaries take no flags or environment variables; everything here is a
//!   fixed default derived from the demo name and build mode.

use crate::logging::{default_log_level, init_logging, LogLevel, LoggingError};
use std::path::{Path, PathBuf};

const LOG_ROOT_DIR_NAME: &str = "recordbook-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub demo_name: String,
    pub log_level: LogLevel,
    pub log_dir: PathBuf,
    /// Directory holding stores and input/report files.
    pub data_dir: PathBuf,
}

impl DemoConfig {
    /// Defaults: build-mode log level, logs under
    /// `<temp>/recordbook-logs/<demo_name>`, data in the working directory.
    pub fn for_demo(demo_name: &str) -> Self {
        Self {
            demo_name: demo_name.to_string(),
            log_level: default_log_level(),
            log_dir: std::env::temp_dir().join(LOG_ROOT_DIR_NAME).join(demo_name),
            data_dir: PathBuf::from("."),
        }
    }

    /// Points data files at `data_dir`.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Resolves `file_name` under `data_dir`.
    pub fn data_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Starts file logging for this demo.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        init_logging(self.log_level, &self.log_dir)
    }
}
