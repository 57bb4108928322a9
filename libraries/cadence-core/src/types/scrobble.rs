/// Scrobble and now-playing types
use super::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scrobble request item as dispatched by the coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrobbleEvent {
    pub target_id: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub username: String,
    pub timestamp: DateTime<Utc>,
    /// `true` for a finished playback, `false` for a now-playing update
    pub is_submission: bool,
}

/// Result of a registered playback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scrobbled {
    pub track_id: String,
    pub played_at: DateTime<Utc>,
    /// Play count of the track after this submission
    pub play_count: i64,
}

/// Latest now-playing notification of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlayingEntry {
    pub track_id: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub username: String,
    pub started_at: DateTime<Utc>,
}
