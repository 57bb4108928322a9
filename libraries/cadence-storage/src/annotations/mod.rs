//! Ratings, stars and play counts

use crate::{library_items, scrobbles, Result, StorageError};
use cadence_core::types::{Annotation, ItemKind, PlayerId, Rating};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Highest rating accepted by [`set_rating`]
pub const MAX_RATING: Rating = 5;

// Read-then-write transactions take the write lock at BEGIN; a deferred one
// fails with SQLITE_BUSY when it cannot upgrade.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

type AnnotationRow = (String, i64, bool, Option<i64>, i64, Option<i64>);

fn from_millis(ms: Option<i64>) -> Option<DateTime<Utc>> {
    ms.and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Get the annotation of an item
///
/// Items that were never annotated return an empty annotation.
pub async fn get(pool: &SqlitePool, id: &str) -> Result<Annotation> {
    library_items::require(pool, id).await?;

    let row: Option<AnnotationRow> = sqlx::query_as(
        "SELECT item_id, rating, starred, starred_at, play_count, play_date
         FROM annotations WHERE item_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map_or_else(
        || Annotation::empty(id),
        |(item_id, rating, starred, starred_at, play_count, play_date)| Annotation {
            item_id,
            rating: rating as Rating,
            starred,
            starred_at: from_millis(starred_at),
            play_count,
            play_date: from_millis(play_date),
        },
    ))
}

/// Set the rating of an item
///
/// # Errors
///
/// `InvalidInput` when the rating is outside `0..=5`, `NotFound` when the
/// item does not exist.
pub async fn set_rating(pool: &SqlitePool, id: &str, rating: Rating) -> Result<()> {
    if !(0..=MAX_RATING).contains(&rating) {
        return Err(StorageError::InvalidInput(format!(
            "rating must be between 0 and {}, got {}",
            MAX_RATING, rating
        )));
    }
    library_items::require(pool, id).await?;

    sqlx::query(
        "INSERT INTO annotations (item_id, rating) VALUES (?, ?)
         ON CONFLICT(item_id) DO UPDATE SET rating = excluded.rating",
    )
    .bind(id)
    .bind(rating)
    .execute(pool)
    .await?;

    Ok(())
}

/// Star or unstar a batch of items
///
/// Runs in one transaction: if any ID is unknown nothing is written.
pub async fn set_starred(
    pool: &SqlitePool,
    ids: &[String],
    starred: bool,
    at: DateTime<Utc>,
) -> Result<()> {
    let starred_at = starred.then(|| at.timestamp_millis());
    let mut tx = pool.begin_with(BEGIN_WRITE).await?;

    for id in ids {
        library_items::require(&mut *tx, id).await?;

        sqlx::query(
            "INSERT INTO annotations (item_id, starred, starred_at) VALUES (?, ?, ?)
             ON CONFLICT(item_id) DO UPDATE SET
                starred = excluded.starred,
                starred_at = excluded.starred_at",
        )
        .bind(id)
        .bind(starred)
        .bind(starred_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Record one play of a track
///
/// Bumps the play count of the track and of its album and appends the play
/// to the scrobble history, all in one transaction. The play date only moves
/// forward, so late submissions with an older timestamp still count but do
/// not rewind it. Returns the track's new play count.
pub async fn record_play(
    pool: &SqlitePool,
    player_id: PlayerId,
    track_id: &str,
    at: DateTime<Utc>,
) -> Result<i64> {
    let mut tx = pool.begin_with(BEGIN_WRITE).await?;

    let item = library_items::require(&mut *tx, track_id).await?;
    if item.kind != ItemKind::Track {
        return Err(StorageError::not_found("Track", track_id));
    }

    let played_at = at.timestamp_millis();
    let targets = std::iter::once(item.id.as_str()).chain(item.album_id.as_deref());
    for target in targets {
        sqlx::query(
            "INSERT INTO annotations (item_id, play_count, play_date) VALUES (?, 1, ?)
             ON CONFLICT(item_id) DO UPDATE SET
                play_count = annotations.play_count + 1,
                play_date = MAX(COALESCE(annotations.play_date, 0), excluded.play_date)",
        )
        .bind(target)
        .bind(played_at)
        .execute(&mut *tx)
        .await?;
    }

    scrobbles::insert(&mut *tx, player_id, track_id, at).await?;

    let (play_count,): (i64,) =
        sqlx::query_as("SELECT play_count FROM annotations WHERE item_id = ?")
            .bind(track_id)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(play_count)
}
