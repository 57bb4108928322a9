/// ID types for Cadence entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media folder identifier
pub type MediaFolderId = i64;

/// Player identifier
///
/// Every request is currently attributed to [`PlayerId::DEFAULT`]. Telling
/// players apart by client name, username or remote address is not
/// implemented yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// The single implicit player
    pub const DEFAULT: Self = Self(1);

    /// Create a new player ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
