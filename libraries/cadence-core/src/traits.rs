//! Collaborator traits consumed by the annotation coordinator

use crate::error::Result;
use crate::types::{MediaFolder, MediaFolderId, NowPlayingEntry, PlayerId, Rating, Scrobbled};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Lookup of the configured library root folders
pub trait FolderRegistry: Send + Sync {
    /// Get a folder by ID
    fn get(&self, id: MediaFolderId) -> Result<MediaFolder>;

    /// Get all folders
    fn get_all(&self) -> Result<Vec<MediaFolder>>;
}

/// Rating and starred state of library items
///
/// Both operations fail with [`CoreError::NotFound`](crate::CoreError::NotFound)
/// when an id does not exist.
#[async_trait]
pub trait RatingService: Send + Sync {
    /// Set the rating (0..=5) of a track, album or artist
    async fn set_rating(&self, id: &str, rating: Rating) -> Result<()>;

    /// Star or unstar a batch of items
    async fn set_star(&self, starred: bool, ids: &[String]) -> Result<()>;
}

/// Playback submissions and now-playing state
#[async_trait]
pub trait ScrobbleService: Send + Sync {
    /// Record that a track was played at `at`
    async fn register(&self, player_id: PlayerId, id: &str, at: DateTime<Utc>)
        -> Result<Scrobbled>;

    /// Record that a track is currently playing on a player
    async fn now_playing(
        &self,
        player_id: PlayerId,
        player_name: &str,
        id: &str,
        username: &str,
    ) -> Result<NowPlayingEntry>;
}
