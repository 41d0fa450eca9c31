//! Persistent inventory log service.
//!
//! # Responsibility
//! - Keep a keyed in-memory log of entities.
//! - Save and restore the whole log through a `JsonStore`.
//!
//! # Invariants
//! - Persistence happens only at explicit save/load points.
//! - A failed load leaves the in-memory log untouched.

use crate::model::entity::Entity;
use crate::model::inventory::InventoryItem;
use crate::repo::entity_repo::{EntityRepository, InMemoryRepository, RepoError, RepoResult};
use crate::store::json_store::{JsonStore, StoreError};
use chrono::{Duration, NaiveDate};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default store file name for the inventory demo.
pub const INVENTORY_STORE_FILE: &str = "inventory.json";

/// Load failure: the store could not be read, or it held duplicate ids.
#[derive(Debug)]
pub enum LoadError {
    Store(StoreError),
    Repo(RepoError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "stored data rejected: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StoreError> for LoadError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RepoError> for LoadError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Keyed entity log backed by one JSON store.
pub struct InventoryLogger<T> {
    log: InMemoryRepository<T>,
    store: JsonStore,
}

impl<T> InventoryLogger<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    pub fn new(store_path: impl AsRef<Path>) -> Self {
        Self {
            log: InMemoryRepository::new(),
            store: JsonStore::new(store_path.as_ref()),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn add(&mut self, item: T) -> RepoResult<()> {
        self.log.add(item)
    }

    pub fn list_all(&self) -> Vec<T> {
        self.log.list_all()
    }

    /// Writes the whole log to the store.
    pub fn save_to_store(&self) -> Result<(), StoreError> {
        self.store.save_all(&self.log.list_all())
    }

    /// Replaces the in-memory log with the store contents.
    ///
    /// A missing store yields an empty log.
    pub fn load_from_store(&mut self) -> Result<usize, LoadError> {
        let records: Vec<T> = self.store.load_all()?;
        self.log.replace_all(records)?;
        info!(
            "event=inventory_load module=inventory status=ok count={}",
            self.log.len()
        );
        Ok(self.log.len())
    }
}

impl InventoryLogger<InventoryItem> {
    /// Seeds five items added over the last five days.
    pub fn seed_sample_data(&mut self, today: NaiveDate) -> RepoResult<()> {
        let added = |days_ago: i64| today - Duration::days(days_ago);
        self.add(InventoryItem::new(1, "Laptop", 10, added(5)))?;
        self.add(InventoryItem::new(2, "Mouse", 50, added(3)))?;
        self.add(InventoryItem::new(3, "Keyboard", 30, added(2)))?;
        self.add(InventoryItem::new(4, "Monitor", 15, added(1)))?;
        self.add(InventoryItem::new(5, "Printer", 8, today))?;
        Ok(())
    }
}
