//! Domain model for the recordbook demos.
//!
//! # Responsibility
//! - Define the entity capability traits shared by every repository.
//! - Define the concrete records used by each demo domain.
//!
//! # Invariants
//! - Every stored record is identified by a caller-assigned `EntityId`.
//! - Entity ids never change after construction.

pub mod entity;
pub mod finance;
pub mod health;
pub mod inventory;
pub mod student;
pub mod warehouse;
