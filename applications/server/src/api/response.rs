/// Subsonic response envelope
use cadence_core::{ApiError, MediaFolder};
use serde::Serialize;

/// Protocol version reported to clients
pub const API_VERSION: &str = "1.16.1";

#[derive(Debug, Serialize)]
pub struct Envelope {
    #[serde(rename = "subsonic-response")]
    pub response: SubsonicResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsonicResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(rename = "type")]
    pub server_type: &'static str,
    pub server_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_folders: Option<MusicFolders>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicFolders {
    pub music_folder: Vec<MusicFolder>,
}

#[derive(Debug, Serialize)]
pub struct MusicFolder {
    pub id: i64,
    pub name: String,
}

impl From<MediaFolder> for MusicFolder {
    fn from(folder: MediaFolder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
        }
    }
}

impl Envelope {
    fn new(status: &'static str) -> Self {
        Self {
            response: SubsonicResponse {
                status,
                version: API_VERSION,
                server_type: "cadence",
                server_version: env!("CARGO_PKG_VERSION"),
                error: None,
                music_folders: None,
            },
        }
    }

    /// Empty acknowledgment
    pub fn ok() -> Self {
        Self::new("ok")
    }

    pub fn failed(error: &ApiError) -> Self {
        let mut envelope = Self::new("failed");
        envelope.response.error = Some(ErrorBody {
            code: error.code(),
            message: error.message.clone(),
        });
        envelope
    }

    pub fn with_music_folders(mut self, folders: Vec<MediaFolder>) -> Self {
        self.response.music_folders = Some(MusicFolders {
            music_folder: folders.into_iter().map(MusicFolder::from).collect(),
        });
        self
    }
}
