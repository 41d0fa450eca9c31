//! Persisted inventory log record.
//!
//! # Invariants
//! - Wire field names are `id`, `name`, `quantity`, `date_added`.
//! - `date_added` serializes as an ISO calendar date (`YYYY-MM-DD`).

use crate::model::entity::{Entity, EntityId, Quantified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged stock entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: i32,
    pub date_added: NaiveDate,
}

impl InventoryItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Quantified for InventoryItem {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}
