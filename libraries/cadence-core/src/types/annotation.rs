/// Annotation and catalog types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User rating, `0` meaning "no rating"
pub type Rating = i32;

/// Kind of library entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Track,
    Album,
    Artist,
}

impl ItemKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "track" => Ok(Self::Track),
            "album" => Ok(Self::Album),
            "artist" => Ok(Self::Artist),
            _ => Err(format!(
                "unknown kind '{}', expected track, album or artist",
                s
            )),
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalog entry that annotations can be attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: String,
    pub kind: ItemKind,
    /// Album a track belongs to (tracks only)
    pub album_id: Option<String>,
}

impl LibraryItem {
    pub fn track(id: impl Into<String>, album_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Track,
            album_id,
        }
    }

    pub fn album(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Album,
            album_id: None,
        }
    }

    pub fn artist(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Artist,
            album_id: None,
        }
    }
}

/// Engagement state stored per library item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub item_id: String,
    pub rating: Rating,
    pub starred: bool,
    pub starred_at: Option<DateTime<Utc>>,
    pub play_count: i64,
    pub play_date: Option<DateTime<Utc>>,
}

impl Annotation {
    /// Annotation of an item nobody has touched yet
    pub fn empty(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            rating: 0,
            starred: false,
            starred_at: None,
            play_count: 0,
            play_date: None,
        }
    }
}
