//! Entity capability traits.
//!
//! # Responsibility
//! - Describe what a record must expose to live in a keyed repository.
//! - Describe the optional mutable quantity used by stock-like records.
//!
//! # Invariants
//! - `Entity::id` returns the same value for the whole lifetime of a record.
//! - `Quantified::set_quantity` is only called by the repository's checked
//!   update path, after the new value has been validated.

/// Caller-assigned identifier for every stored record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i32;

/// Record with a stable, unique integer identity.
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// Record carrying a mutable stock quantity.
pub trait Quantified: Entity {
    fn quantity(&self) -> i32;

    /// Overwrites the stored quantity.
    ///
    /// Repository code validates `quantity >= 0` before calling this.
    fn set_quantity(&mut self, quantity: i32);
}
