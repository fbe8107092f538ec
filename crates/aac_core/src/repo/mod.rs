//! Repository layer: vocabulary store and category registry.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection bookkeeping out of service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Tile::validate()` before mutating.
//! - Repository APIs return semantic errors (`TileNotFound`,
//!   `IndexOutOfRange`) and never panic on stale handles.

pub mod category_repo;
pub mod vocab_repo;
