//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist scored items and return them in ranking order.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Ids come from SQLite `AUTOINCREMENT` and are never reused.
//! - Read paths return stored scores as-is; rows written under an older
//!   scoring rule still list.
//! - Ranking is `net_score DESC, created_at ASC, id ASC`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::item::{Item, ItemId, NewItem};
use crate::scoring::Scores;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    description,
    cost,
    severity,
    frequency,
    benefit_score,
    cost_score,
    net_score,
    created_at
FROM items";

const ITEM_COLUMNS: [&str; 9] = [
    "id",
    "description",
    "cost",
    "severity",
    "frequency",
    "benefit_score",
    "cost_score",
    "net_score",
    "created_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ItemId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; open it with `open_db`"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for item create/list/delete.
pub trait ItemRepository {
    /// Persists one scored item and returns the stored record.
    fn insert_item(&self, input: &NewItem, scores: Scores, created_at: i64) -> RepoResult<Item>;
    /// Returns all items in ranking order.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Hard-deletes one item; `NotFound` when no row matched.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `items` shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_item_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn insert_item(&self, input: &NewItem, scores: Scores, created_at: i64) -> RepoResult<Item> {
        let id: ItemId = self.conn.query_row(
            "INSERT INTO items (
                description,
                cost,
                severity,
                frequency,
                benefit_score,
                cost_score,
                net_score,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id;",
            params![
                input.description.as_str(),
                input.cost,
                input.severity,
                input.frequency,
                scores.benefit_score,
                scores.cost_score,
                scores.net_score,
                created_at,
            ],
            |row| row.get(0),
        )?;

        Ok(Item::from_parts(id, input, scores, created_at))
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             ORDER BY net_score DESC, created_at ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM items WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id: ItemId = row.get("id")?;
    Ok(Item {
        id,
        description: row.get("description")?,
        cost: row.get("cost")?,
        severity: parse_weight(row, id, "severity")?,
        frequency: parse_weight(row, id, "frequency")?,
        benefit_score: row.get("benefit_score")?,
        cost_score: row.get("cost_score")?,
        net_score: row.get("net_score")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_weight(row: &Row<'_>, id: ItemId, column: &str) -> RepoResult<i32> {
    let raw: i64 = row.get(column)?;
    i32::try_from(raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "value `{raw}` in items.{column} for item {id} is out of range"
        ))
    })
}

fn ensure_item_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 =
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "items")? {
        return Err(RepoError::MissingRequiredTable("items"));
    }

    for column in ITEM_COLUMNS {
        if !table_has_column(conn, "items", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "items",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
