//! Item domain model.
//!
//! # Responsibility
//! - Define raw user input (`NewItem`) and the scored record (`Item`).
//! - Keep the wire field names of the external item contract.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused for another item.
//! - Derived scores are fixed at creation; reads return them as stored.
//! - `cost_score >= 1`.

use crate::scoring::{score, Scores};
use serde::{Deserialize, Serialize};

/// Store-assigned item identifier (SQLite rowid).
pub type ItemId = i64;

/// Raw attributes supplied by the caller when logging a new item.
///
/// The core performs no range checks on these values; negative weights and
/// zero or negative cost are accepted and scored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub description: String,
    /// Monetary or abstract cost unit.
    pub cost: f64,
    /// How bad the problem is.
    pub severity: i32,
    /// How often the problem occurs.
    pub frequency: i32,
}

impl NewItem {
    pub fn new(description: impl Into<String>, cost: f64, severity: i32, frequency: i32) -> Self {
        Self {
            description: description.into(),
            cost,
            severity,
            frequency,
        }
    }

    /// Runs the scoring engine over this input.
    pub fn scores(&self) -> Scores {
        score(self.cost, self.severity, self.frequency)
    }
}

/// A persisted, scored cost/benefit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub cost: f64,
    pub severity: i32,
    pub frequency: i32,
    pub benefit_score: i64,
    pub cost_score: i64,
    /// Primary ranking key.
    pub net_score: i64,
    /// Unix epoch seconds.
    pub created_at: i64,
}

impl Item {
    /// Assembles a record from its raw input, computed scores and
    /// storage-assigned identity.
    pub fn from_parts(id: ItemId, input: &NewItem, scores: Scores, created_at: i64) -> Self {
        Self {
            id,
            description: input.description.clone(),
            cost: input.cost,
            severity: input.severity,
            frequency: input.frequency,
            benefit_score: scores.benefit_score,
            cost_score: scores.cost_score,
            net_score: scores.net_score,
            created_at,
        }
    }
}
