//! Keyed entity repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/get/remove/list/update-quantity over any `Entity` type.
//! - Own stored entities; hand out shared references or owned snapshots only.
//!
//! # Invariants
//! - `add` never overwrites an existing id.
//! - `update_quantity` is the only mutation path for stored quantities and
//!   rejects negative values.
//! - A failed operation leaves the repository unchanged.

use crate::model::entity::{Entity, EntityId, Quantified};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for keyed entity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// An entity with this id is already stored.
    DuplicateKey(EntityId),
    /// No entity with this id is stored.
    NotFound(EntityId),
    /// Quantity update rejected because the new value is negative.
    InvalidQuantity { id: EntityId, quantity: i32 },
    /// Stock adjustment whose result does not fit the quantity type.
    QuantityOverflow {
        id: EntityId,
        current: i32,
        delta: i32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "item with id {id} already exists"),
            Self::NotFound(id) => write!(f, "item with id {id} not found"),
            Self::InvalidQuantity { id, quantity } => write!(
                f,
                "quantity cannot be negative (id {id}, requested {quantity})"
            ),
            Self::QuantityOverflow { id, current, delta } => write!(
                f,
                "quantity overflow for id {id}: {current} + {delta} is out of range"
            ),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for keyed entity CRUD.
pub trait EntityRepository<T: Entity> {
    fn add(&mut self, entity: T) -> RepoResult<()>;
    fn get(&self, id: EntityId) -> RepoResult<&T>;
    fn remove(&mut self, id: EntityId) -> RepoResult<T>;
    fn list_all(&self) -> Vec<T>;
    fn contains(&self, id: EntityId) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites the quantity of the stored entity.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent (checked first).
    /// - `InvalidQuantity` when `new_quantity < 0`.
    fn update_quantity(&mut self, id: EntityId, new_quantity: i32) -> RepoResult<()>
    where
        T: Quantified;
}

/// `BTreeMap`-backed repository; snapshots are ordered by ascending id.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: BTreeMap<EntityId, T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<T: Entity + Clone> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first entity (by id order) matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.values().find(|entity| predicate(entity))
    }

    /// Iterates stored entities by ascending id without copying.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Replaces the whole contents with `entities`.
    ///
    /// # Errors
    /// - `DuplicateKey` when `entities` contains the same id twice; the
    ///   current contents are kept in that case.
    pub fn replace_all(&mut self, entities: Vec<T>) -> RepoResult<()> {
        let mut next = BTreeMap::new();
        for entity in entities {
            let id = entity.id();
            if next.insert(id, entity).is_some() {
                warn!(
                    "event=repo_replace_all module=repo status=error error_code=duplicate_key id={id}"
                );
                return Err(RepoError::DuplicateKey(id));
            }
        }

        debug!(
            "event=repo_replace_all module=repo status=ok count={}",
            next.len()
        );
        self.items = next;
        Ok(())
    }
}

impl<T: Entity + Clone> EntityRepository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) -> RepoResult<()> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            debug!("event=repo_add module=repo status=rejected error_code=duplicate_key id={id}");
            return Err(RepoError::DuplicateKey(id));
        }

        self.items.insert(id, entity);
        debug!("event=repo_add module=repo status=ok id={id}");
        Ok(())
    }

    fn get(&self, id: EntityId) -> RepoResult<&T> {
        self.items.get(&id).ok_or(RepoError::NotFound(id))
    }

    fn remove(&mut self, id: EntityId) -> RepoResult<T> {
        match self.items.remove(&id) {
            Some(entity) => {
                debug!("event=repo_remove module=repo status=ok id={id}");
                Ok(entity)
            }
            None => {
                debug!(
                    "event=repo_remove module=repo status=rejected error_code=not_found id={id}"
                );
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn update_quantity(&mut self, id: EntityId, new_quantity: i32) -> RepoResult<()>
    where
        T: Quantified,
    {
        let entity = self.items.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        if new_quantity < 0 {
            debug!(
                "event=repo_update_quantity module=repo status=rejected error_code=invalid_quantity id={id} quantity={new_quantity}"
            );
            return Err(RepoError::InvalidQuantity {
                id,
                quantity: new_quantity,
            });
        }

        entity.set_quantity(new_quantity);
        debug!("event=repo_update_quantity module=repo status=ok id={id} quantity={new_quantity}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityRepository, InMemoryRepository, RepoError};
    use crate::model::entity::{Entity, EntityId};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tag {
        id: EntityId,
        label: &'static str,
    }

    impl Entity for Tag {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    #[test]
    fn replace_all_rejects_duplicate_ids_and_keeps_contents() {
        let mut repo = InMemoryRepository::new();
        repo.add(Tag { id: 1, label: "a" }).unwrap();

        let err = repo
            .replace_all(vec![Tag { id: 2, label: "b" }, Tag { id: 2, label: "c" }])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateKey(2));
        assert_eq!(repo.list_all(), vec![Tag { id: 1, label: "a" }]);
    }

    #[test]
    fn find_returns_first_match_in_id_order() {
        let mut repo = InMemoryRepository::new();
        repo.add(Tag { id: 3, label: "x" }).unwrap();
        repo.add(Tag { id: 1, label: "x" }).unwrap();

        let found = repo.find(|tag| tag.label == "x").unwrap();
        assert_eq!(found.id, 1);
        assert!(repo.find(|tag| tag.label == "missing").is_none());
    }

    #[test]
    fn error_messages_name_the_id() {
        assert_eq!(
            RepoError::DuplicateKey(4).to_string(),
            "item with id 4 already exists"
        );
        assert_eq!(RepoError::NotFound(9).to_string(), "item with id 9 not found");
    }
}
