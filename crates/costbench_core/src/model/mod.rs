//! Domain model for cost/benefit items.
//!
//! # Responsibility
//! - Define the raw input shape and the persisted, fully scored record.
//!
//! # Invariants
//! - Every persisted item is identified by a store-assigned `ItemId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod item;
