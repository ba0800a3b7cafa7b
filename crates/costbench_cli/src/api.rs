//! Use-case API for the three item operations.
//!
//! # Responsibility
//! - Expose list/create/delete at the boundary where transport-level
//!   input checks belong.
//! - Scope one SQLite connection to each call.
//!
//! # Invariants
//! - Every call opens its own connection and drops it before returning,
//!   on success and failure alike.
//! - A missing item is reported as `ApiError::NotFound`, never as a
//!   storage failure.

use costbench_core::db::open_db;
use costbench_core::{
    Item, ItemId, ItemService, NewItem, RepoError, RepoResult, SqliteItemRepository,
};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Rejected before reaching the item store.
    InvalidInput(String),
    NotFound(ItemId),
    Storage(RepoError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::NotFound(_) => write!(f, "Item not found"),
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidInput(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub status: &'static str,
    pub deleted: ItemId,
}

/// Returns every item, best net score first.
pub fn list_items(db_path: &Path) -> ApiResult<Vec<Item>> {
    with_item_service(db_path, |service| service.list_items())
}

/// Checks and stores a new item, returning the full scored record.
///
/// # Errors
/// - `InvalidInput` for a blank description or a non-finite cost.
pub fn create_item(db_path: &Path, input: NewItem) -> ApiResult<Item> {
    let input = normalize_new_item(input)?;
    with_item_service(db_path, |service| service.create_item(&input))
}

/// Deletes one item by id.
pub fn delete_item(db_path: &Path, id: ItemId) -> ApiResult<DeleteConfirmation> {
    let deleted = with_item_service(db_path, |service| service.delete_item(id))?;
    Ok(DeleteConfirmation {
        status: "ok",
        deleted,
    })
}

fn normalize_new_item(input: NewItem) -> ApiResult<NewItem> {
    let description = input.description.trim();
    if description.is_empty() {
        return Err(ApiError::InvalidInput(
            "description cannot be empty".to_string(),
        ));
    }
    if !input.cost.is_finite() {
        return Err(ApiError::InvalidInput(format!(
            "cost must be a finite number, got `{}`",
            input.cost
        )));
    }

    Ok(NewItem {
        description: description.to_string(),
        ..input
    })
}

fn with_item_service<T>(
    db_path: &Path,
    f: impl FnOnce(&ItemService<SqliteItemRepository<'_>>) -> RepoResult<T>,
) -> ApiResult<T> {
    let conn = open_db(db_path).map_err(RepoError::from)?;
    let repo = SqliteItemRepository::try_new(&conn)?;
    let service = ItemService::new(repo);
    Ok(f(&service)?)
}

#[cfg(test)]
mod tests {
    use super::{create_item, delete_item, list_items, ApiError, DeleteConfirmation};
    use costbench_core::NewItem;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn temp_db() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.sqlite3");
        (dir, path)
    }

    #[test]
    fn create_then_list_returns_same_record() {
        let (_dir, db) = temp_db();

        let created = create_item(&db, NewItem::new("Leaky faucet", 50.0, 3, 5)).unwrap();
        assert_eq!(created.net_score, 5);

        let listed = list_items(&db).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn create_trims_description() {
        let (_dir, db) = temp_db();

        let created = create_item(&db, NewItem::new("  Loose tile \n", 8.0, 1, 1)).unwrap();
        assert_eq!(created.description, "Loose tile");
    }

    #[test]
    fn create_rejects_blank_description() {
        let (_dir, db) = temp_db();

        let err = create_item(&db, NewItem::new("   ", 1.0, 1, 1)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(list_items(&db).unwrap().is_empty());
    }

    #[test]
    fn create_rejects_non_finite_cost() {
        let (_dir, db) = temp_db();

        for cost in [f64::NAN, f64::INFINITY] {
            let err = create_item(&db, NewItem::new("bad cost", cost, 1, 1)).unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(_)), "cost={cost}");
        }
    }

    #[test]
    fn delete_confirms_then_reports_not_found() {
        let (_dir, db) = temp_db();
        let created = create_item(&db, NewItem::new("Squeaky hinge", 3.0, 1, 2)).unwrap();

        assert_eq!(
            delete_item(&db, created.id).unwrap(),
            DeleteConfirmation {
                status: "ok",
                deleted: created.id,
            }
        );

        let err = delete_item(&db, created.id).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(id) if id == created.id));
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn delete_confirmation_matches_response_shape() {
        let value = serde_json::to_value(DeleteConfirmation {
            status: "ok",
            deleted: 4,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok", "deleted": 4 }));
    }

    #[test]
    fn unreadable_database_path_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let err = list_items(&blocker.join("items.sqlite3")).unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)), "unexpected error: {err}");
    }
}
