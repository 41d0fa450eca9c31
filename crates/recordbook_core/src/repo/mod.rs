//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the keyed CRUD contract shared by every demo domain.
//! - Keep id uniqueness and quantity validation inside one boundary.
//!
//! # Invariants
//! - At most one entity per `EntityId` at any time.
//! - Repository APIs return semantic errors (`DuplicateKey`, `NotFound`,
//!   `InvalidQuantity`) instead of silently ignoring a request.

pub mod entity_repo;
