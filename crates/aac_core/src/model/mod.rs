//! Board domain model.
//!
//! # Responsibility
//! - Define canonical tile, category and remote pack structures.
//!
//! # Invariants
//! - Every tile is identified by a stable `TileId`.
//! - A tile belongs to exactly one collection at a time.

pub mod category;
pub mod pack;
pub mod tile;
