//! In-memory now-playing state

use cadence_core::types::{NowPlayingEntry, PlayerId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Latest now-playing notification per player
///
/// Entries are transient and lost on restart.
#[derive(Debug, Default)]
pub struct NowPlayingRegistry {
    entries: RwLock<HashMap<PlayerId, NowPlayingEntry>>,
}

impl NowPlayingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry of the entry's player
    pub async fn set(&self, entry: NowPlayingEntry) {
        self.entries.write().await.insert(entry.player_id, entry);
    }

    pub async fn get(&self, player_id: PlayerId) -> Option<NowPlayingEntry> {
        self.entries.read().await.get(&player_id).cloned()
    }

    /// All entries ordered by player
    pub async fn get_all(&self) -> Vec<NowPlayingEntry> {
        let mut entries: Vec<_> = self.entries.read().await.values().cloned().collect();
        entries.sort_by_key(|entry| entry.player_id);
        entries
    }
}
