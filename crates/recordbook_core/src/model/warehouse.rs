//! Warehouse stock records.
//!
//! # Responsibility
//! - Model electronic and grocery stock as one record with a closed kind.
//!
//! # Invariants
//! - `quantity` is only changed through `Quantified::set_quantity`, which the
//!   repository calls after validating the new value.

use crate::model::entity::{Entity, EntityId, Quantified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind-specific attributes of a warehouse item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Electronic { brand: String, warranty_months: u32 },
    Grocery { expiry_date: NaiveDate },
}

/// Coarse category used to pick a warehouse repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Electronic,
    Grocery,
}

impl ItemCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Electronic => "electronic",
            Self::Grocery => "grocery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseItem {
    pub id: EntityId,
    pub name: String,
    quantity: i32,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl WarehouseItem {
    pub fn electronic(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            kind: ItemKind::Electronic {
                brand: brand.into(),
                warranty_months,
            },
        }
    }

    pub fn grocery(
        id: EntityId,
        name: impl Into<String>,
        quantity: i32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            kind: ItemKind::Grocery { expiry_date },
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Electronic { .. } => ItemCategory::Electronic,
            ItemKind::Grocery { .. } => ItemCategory::Grocery,
        }
    }
}

impl Entity for WarehouseItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Quantified for WarehouseItem {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

impl Display for WarehouseItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ItemKind::Electronic {
                brand,
                warranty_months,
            } => write!(
                f,
                "Electronic: Id={}, Name={}, Quantity={}, Brand={}, Warranty={} months",
                self.id, self.name, self.quantity, brand, warranty_months
            ),
            ItemKind::Grocery { expiry_date } => write!(
                f,
                "Grocery: Id={}, Name={}, Quantity={}, Expiry={}",
                self.id,
                self.name,
                self.quantity,
                expiry_date.format("%Y-%m-%d")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemCategory, WarehouseItem};
    use crate::model::entity::Quantified;
    use chrono::NaiveDate;

    #[test]
    fn display_renders_kind_specific_fields() {
        let laptop = WarehouseItem::electronic(1, "Laptop", 10, "Dell", 12);
        assert_eq!(
            laptop.to_string(),
            "Electronic: Id=1, Name=Laptop, Quantity=10, Brand=Dell, Warranty=12 months"
        );

        let expiry = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
        let milk = WarehouseItem::grocery(1, "Milk", 50, expiry);
        assert_eq!(
            milk.to_string(),
            "Grocery: Id=1, Name=Milk, Quantity=50, Expiry=2024-05-09"
        );
    }

    #[test]
    fn category_follows_kind() {
        let laptop = WarehouseItem::electronic(1, "Laptop", 10, "Dell", 12);
        assert_eq!(laptop.category(), ItemCategory::Electronic);
        assert_eq!(laptop.quantity(), 10);
    }

    #[test]
    fn serialization_flattens_kind_tag() {
        let laptop = WarehouseItem::electronic(2, "Smartphone", 20, "Samsung", 6);
        let json = serde_json::to_value(&laptop).unwrap();
        assert_eq!(json["kind"], "electronic");
        assert_eq!(json["brand"], "Samsung");
        assert_eq!(json["quantity"], 20);

        let decoded: WarehouseItem = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, laptop);
    }
}
