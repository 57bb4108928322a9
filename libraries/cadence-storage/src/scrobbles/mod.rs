//! Playback submission history

use crate::Result;
use cadence_core::types::PlayerId;
use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool};

/// Append a submission to the history
pub async fn insert<'e, E>(
    executor: E,
    player_id: PlayerId,
    track_id: &str,
    played_at: DateTime<Utc>,
) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO scrobbles (player_id, track_id, played_at) VALUES (?, ?, ?)")
        .bind(player_id.get())
        .bind(track_id)
        .bind(played_at.timestamp_millis())
        .execute(executor)
        .await?;

    Ok(())
}

/// Play times of a track, oldest first
pub async fn history_for_track(pool: &SqlitePool, track_id: &str) -> Result<Vec<DateTime<Utc>>> {
    let rows: Vec<(i64,)> =
        sqlx::query_as("SELECT played_at FROM scrobbles WHERE track_id = ? ORDER BY played_at, id")
            .bind(track_id)
            .fetch_all(pool)
            .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(ms,)| DateTime::<Utc>::from_timestamp_millis(ms))
        .collect())
}
