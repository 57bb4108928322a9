/// Media folder types
use super::MediaFolderId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display name of the default library folder
pub const DEFAULT_FOLDER_NAME: &str = "Music Library";

/// A configured library root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFolder {
    pub id: MediaFolderId,
    pub name: String,
    pub path: PathBuf,
}

impl MediaFolder {
    /// Create a media folder
    pub fn new(id: MediaFolderId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
        }
    }

    /// The default folder (id `0`) rooted at the configured music folder
    pub fn default_for(path: impl Into<PathBuf>) -> Self {
        Self::new(0, DEFAULT_FOLDER_NAME, path)
    }
}
