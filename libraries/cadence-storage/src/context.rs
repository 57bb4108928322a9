use crate::{annotations, library_items, NowPlayingRegistry, StorageError};
use async_trait::async_trait;
use cadence_core::{
    error::Result,
    traits::{RatingService, ScrobbleService},
    types::{ItemKind, NowPlayingEntry, PlayerId, Rating, Scrobbled},
};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Annotation store using `SQLite`
///
/// Ratings, stars and play history live in the database; now-playing state
/// is kept in memory.
#[derive(Debug)]
pub struct LocalAnnotationStore {
    pool: SqlitePool,
    now_playing: NowPlayingRegistry,
}

impl LocalAnnotationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            now_playing: NowPlayingRegistry::new(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn now_playing_registry(&self) -> &NowPlayingRegistry {
        &self.now_playing
    }
}

#[async_trait]
impl RatingService for LocalAnnotationStore {
    async fn set_rating(&self, id: &str, rating: Rating) -> Result<()> {
        Ok(annotations::set_rating(&self.pool, id, rating).await?)
    }

    async fn set_star(&self, starred: bool, ids: &[String]) -> Result<()> {
        Ok(annotations::set_starred(&self.pool, ids, starred, Utc::now()).await?)
    }
}

#[async_trait]
impl ScrobbleService for LocalAnnotationStore {
    async fn register(&self, player_id: PlayerId, id: &str, at: DateTime<Utc>) -> Result<Scrobbled> {
        let play_count = annotations::record_play(&self.pool, player_id, id, at).await?;
        tracing::debug!(track = %id, %player_id, play_count, "Registered play");

        Ok(Scrobbled {
            track_id: id.to_string(),
            played_at: at,
            play_count,
        })
    }

    async fn now_playing(
        &self,
        player_id: PlayerId,
        player_name: &str,
        id: &str,
        username: &str,
    ) -> Result<NowPlayingEntry> {
        let item = library_items::require(&self.pool, id).await?;
        if item.kind != ItemKind::Track {
            return Err(StorageError::not_found("Track", id).into());
        }

        let entry = NowPlayingEntry {
            track_id: item.id,
            player_id,
            player_name: player_name.to_string(),
            username: username.to_string(),
            started_at: Utc::now(),
        };
        self.now_playing.set(entry.clone()).await;
        Ok(entry)
    }
}
