//! Core domain logic for the recordbook demos.
//! This crate owns the keyed repository and every demo's business rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::DemoConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entity::{Entity, EntityId, Quantified};
pub use model::finance::{
    format_amount, Account, AccountKind, FinanceError, FinanceResult, Transaction,
    TransactionProcessor,
};
pub use model::health::{Patient, Prescription};
pub use model::inventory::InventoryItem;
pub use model::student::{Grade, Student};
pub use model::warehouse::{ItemCategory, ItemKind, WarehouseItem};
pub use repo::entity_repo::{EntityRepository, InMemoryRepository, RepoError, RepoResult};
pub use service::finance_service::{FinanceLedger, RecordOutcome};
pub use service::grading_service::{
    parse_student_line, GradingError, GradingResult, StudentResultProcessor,
};
pub use service::health_service::HealthSystem;
pub use service::inventory_service::{InventoryLogger, LoadError};
pub use service::warehouse_service::{increase_stock, WarehouseManager};
pub use store::json_store::{JsonStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
