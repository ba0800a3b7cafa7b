//! Item use-case service.
//!
//! # Responsibility
//! - Provide the create/list/delete entry points of the item store.
//! - Apply the scoring engine at write time and stamp creation time.
//!
//! # Invariants
//! - This service is the only caller of `scoring::score` on write paths.
//! - Service layer remains storage-agnostic.

use crate::model::item::{Item, ItemId, NewItem};
use crate::repo::item_repo::{ItemRepository, RepoResult};
use log::{info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of creation timestamps in Unix epoch seconds.
pub type Clock = fn() -> i64;

/// Use-case service wrapper for item operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
    clock: Clock,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service stamping items with the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, unix_now_secs)
    }

    /// Creates a service with a caller-provided clock.
    pub fn with_clock(repo: R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Scores and persists a new item.
    ///
    /// # Contract
    /// - No range validation: negative weights and non-positive cost are
    ///   stored as given.
    /// - Returns the complete stored record including assigned id.
    pub fn create_item(&self, input: &NewItem) -> RepoResult<Item> {
        let scores = input.scores();
        let item = self.repo.insert_item(input, scores, (self.clock)())?;
        info!(
            "event=item_create module=service status=ok item_id={} net_score={}",
            item.id, item.net_score
        );
        Ok(item)
    }

    /// Lists every item, best net score first.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        let items = self.repo.list_items()?;
        info!(
            "event=item_list module=service status=ok count={}",
            items.len()
        );
        Ok(items)
    }

    /// Permanently removes an item and returns its id.
    ///
    /// Returns `RepoError::NotFound` when the id is absent, including on a
    /// repeated delete of the same id.
    pub fn delete_item(&self, id: ItemId) -> RepoResult<ItemId> {
        match self.repo.delete_item(id) {
            Ok(()) => {
                info!("event=item_delete module=service status=ok item_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=item_delete module=service status=error item_id={} error={}",
                    id, err
                );
                Err(err)
            }
        }
    }
}

/// Current Unix time in whole seconds.
pub fn unix_now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
