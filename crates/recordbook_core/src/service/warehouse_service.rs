//! Warehouse stock management service.
//!
//! # Responsibility
//! - Own one repository per item category.
//! - Route stock changes through the repository's checked quantity update.
//!
//! # Invariants
//! - Ids are unique per category only; the same id may exist in both.
//! - Stock never goes negative.

use crate::model::entity::{EntityId, Quantified};
use crate::model::warehouse::{ItemCategory, WarehouseItem};
use crate::repo::entity_repo::{EntityRepository, InMemoryRepository, RepoError, RepoResult};
use chrono::{Duration, NaiveDate};
use log::{info, warn};

/// Adds `delta` to the stored quantity of `id`.
///
/// # Errors
/// - `NotFound` when `id` is absent.
/// - `InvalidQuantity` when the resulting quantity would be negative.
/// - `QuantityOverflow` when `current + delta` does not fit in `i32`.
pub fn increase_stock<T, R>(repo: &mut R, id: EntityId, delta: i32) -> RepoResult<i32>
where
    T: Quantified,
    R: EntityRepository<T>,
{
    let current = repo.get(id)?.quantity();
    let next = current
        .checked_add(delta)
        .ok_or(RepoError::QuantityOverflow { id, current, delta })?;
    repo.update_quantity(id, next)?;
    Ok(next)
}

#[derive(Default)]
pub struct WarehouseManager {
    electronics: InMemoryRepository<WarehouseItem>,
    groceries: InMemoryRepository<WarehouseItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self, category: ItemCategory) -> &InMemoryRepository<WarehouseItem> {
        match category {
            ItemCategory::Electronic => &self.electronics,
            ItemCategory::Grocery => &self.groceries,
        }
    }

    fn repository_mut(&mut self, category: ItemCategory) -> &mut InMemoryRepository<WarehouseItem> {
        match category {
            ItemCategory::Electronic => &mut self.electronics,
            ItemCategory::Grocery => &mut self.groceries,
        }
    }

    /// Adds `item` to the repository matching its kind.
    pub fn add_item(&mut self, item: WarehouseItem) -> RepoResult<()> {
        self.repository_mut(item.category()).add(item)
    }

    /// Seeds three electronic and three grocery items.
    pub fn seed_data(&mut self, today: NaiveDate) -> RepoResult<()> {
        self.add_item(WarehouseItem::electronic(1, "Laptop", 10, "Dell", 12))?;
        self.add_item(WarehouseItem::electronic(2, "Smartphone", 20, "Samsung", 6))?;
        self.add_item(WarehouseItem::electronic(3, "Headphones", 15, "Sony", 24))?;

        let expires = |days: i64| today + Duration::days(days);
        self.add_item(WarehouseItem::grocery(1, "Milk", 50, expires(7)))?;
        self.add_item(WarehouseItem::grocery(2, "Bread", 30, expires(3)))?;
        self.add_item(WarehouseItem::grocery(3, "Apples", 40, expires(10)))?;
        Ok(())
    }

    pub fn list_items(&self, category: ItemCategory) -> Vec<WarehouseItem> {
        self.repository(category).list_all()
    }

    pub fn get_item(&self, category: ItemCategory, id: EntityId) -> RepoResult<&WarehouseItem> {
        self.repository(category).get(id)
    }

    /// Adjusts stock by `delta` and returns the new quantity.
    pub fn increase_stock(
        &mut self,
        category: ItemCategory,
        id: EntityId,
        delta: i32,
    ) -> RepoResult<i32> {
        let result = increase_stock(self.repository_mut(category), id, delta);
        match &result {
            Ok(quantity) => info!(
                "event=stock_adjust module=warehouse status=ok category={} id={id} quantity={quantity}",
                category.label()
            ),
            Err(err) => warn!(
                "event=stock_adjust module=warehouse status=rejected category={} id={id} error={err}",
                category.label()
            ),
        }
        result
    }

    pub fn remove_item(
        &mut self,
        category: ItemCategory,
        id: EntityId,
    ) -> RepoResult<WarehouseItem> {
        self.repository_mut(category).remove(id)
    }
}
