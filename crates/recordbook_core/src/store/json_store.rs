//! JSON file store for entity collections.
//!
//! # Responsibility
//! - Serialize a full collection to one pretty-printed JSON array.
//! - Read the array back, treating a missing or empty file as no records.
//!
//! # Invariants
//! - File handles never outlive a single `save_all`/`load_all` call.
//! - Writes go to a sibling temp file that is renamed over the target, so a
//!   failed save never leaves a half-written store behind.

use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing a store; every variant means the store is
/// unavailable for the attempted operation.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "store unavailable `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "store unavailable `{}`: invalid json: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Named JSON document holding one collection snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the store with `records`.
    ///
    /// # Side effects
    /// - Creates a `<file>.tmp` sibling and renames it over the target.
    /// - Emits `store_save` logging events with duration and status.
    pub fn save_all<T: Serialize>(&self, records: &[T]) -> StoreResult<()> {
        let started_at = Instant::now();
        info!(
            "event=store_save module=store status=start path={} count={}",
            self.path.display(),
            records.len()
        );

        match self.write_document(records) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} duration_ms={}",
                    self.path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Reads every record from the store.
    ///
    /// Returns an empty collection when the file does not exist or holds only
    /// whitespace.
    pub fn load_all<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        let started_at = Instant::now();
        info!(
            "event=store_load module=store status=start path={}",
            self.path.display()
        );

        match self.read_document() {
            Ok(records) => {
                info!(
                    "event=store_load module=store status=ok path={} count={} duration_ms={}",
                    self.path.display(),
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn write_document<T: Serialize>(&self, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.tmp_path()?;
        let write_result = (|| -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        })();

        if let Err(source) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(source));
        }
        Ok(())
    }

    fn read_document<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn tmp_path(&self) -> StoreResult<PathBuf> {
        let Some(file_name) = self.path.file_name() else {
            return Err(self.io_error(io::Error::new(
                ErrorKind::InvalidInput,
                "store path has no file name",
            )));
        };
        let mut name = file_name.to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
