//! Configured media folders

use crate::error::{CoreError, Result};
use crate::traits::FolderRegistry;
use crate::types::{MediaFolder, MediaFolderId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Library settings the registry is built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Root of the default "Music Library" folder
    #[serde(default = "default_music_folder")]
    pub music_folder: PathBuf,

    /// Additional roots, numbered from 1 in order
    #[serde(default)]
    pub folders: Vec<FolderSettings>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_folder: default_music_folder(),
            folders: Vec::new(),
        }
    }
}

fn default_music_folder() -> PathBuf {
    PathBuf::from("./music")
}

/// One additional library root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderSettings {
    pub name: String,
    pub path: PathBuf,
}

/// Folder registry backed by the library settings
///
/// With only the music folder configured, every lookup returns the default
/// folder whatever id is asked for. Once extra folders are configured, `get`
/// becomes a keyed lookup.
#[derive(Debug, Clone)]
pub struct ConfiguredFolderRegistry {
    folders: Vec<MediaFolder>,
}

impl ConfiguredFolderRegistry {
    pub fn new(settings: &LibrarySettings) -> Self {
        let mut folders = vec![MediaFolder::default_for(settings.music_folder.clone())];
        folders.extend(
            settings
                .folders
                .iter()
                .zip(1..)
                .map(|(folder, id)| MediaFolder::new(id, folder.name.clone(), folder.path.clone())),
        );
        Self { folders }
    }

    fn is_single(&self) -> bool {
        self.folders.len() == 1
    }
}

impl FolderRegistry for ConfiguredFolderRegistry {
    fn get(&self, id: MediaFolderId) -> Result<MediaFolder> {
        if self.is_single() {
            return Ok(self.folders[0].clone());
        }
        self.folders
            .iter()
            .find(|folder| folder.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Media folder", id.to_string()))
    }

    fn get_all(&self) -> Result<Vec<MediaFolder>> {
        Ok(self.folders.clone())
    }
}
