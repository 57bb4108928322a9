//! Catalog entries annotations are attached to

use crate::{Result, StorageError};
use cadence_core::types::{ItemKind, LibraryItem};
use sqlx::{Sqlite, SqlitePool};

type ItemRow = (String, String, Option<String>);

fn from_row((id, kind, album_id): ItemRow) -> Result<LibraryItem> {
    let kind = kind
        .parse::<ItemKind>()
        .map_err(|err| StorageError::CorruptRow(format!("{} for {}", err, id)))?;
    Ok(LibraryItem { id, kind, album_id })
}

/// Register an item, replacing an existing one with the same ID
pub async fn insert(pool: &SqlitePool, item: &LibraryItem) -> Result<()> {
    if item.kind != ItemKind::Track && item.album_id.is_some() {
        return Err(StorageError::InvalidInput(format!(
            "only tracks belong to an album ({} is a {})",
            item.id, item.kind
        )));
    }

    sqlx::query(
        "INSERT INTO library_items (id, kind, album_id) VALUES (?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET kind = excluded.kind, album_id = excluded.album_id",
    )
    .bind(&item.id)
    .bind(item.kind.as_str())
    .bind(&item.album_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get an item by ID
pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<LibraryItem>> {
    find(pool, id).await
}

/// Get an item by ID, failing with `NotFound` when it does not exist
pub async fn require<'e, E>(executor: E, id: &str) -> Result<LibraryItem>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    find(executor, id)
        .await?
        .ok_or_else(|| StorageError::not_found("Item", id))
}

/// Get all items ordered by ID
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<LibraryItem>> {
    let rows: Vec<ItemRow> =
        sqlx::query_as("SELECT id, kind, album_id FROM library_items ORDER BY id")
            .fetch_all(pool)
            .await?;

    rows.into_iter().map(from_row).collect()
}

async fn find<'e, E>(executor: E, id: &str) -> Result<Option<LibraryItem>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row: Option<ItemRow> =
        sqlx::query_as("SELECT id, kind, album_id FROM library_items WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;

    row.map(from_row).transpose()
}
