//! Whole-collection file persistence.
//!
//! # Responsibility
//! - Persist and restore complete entity collections as single documents.
//!
//! # Invariants
//! - A store is always written or read as one whole document.
//! - A missing store reads as an empty collection.

pub mod json_store;
