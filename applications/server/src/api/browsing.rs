/// Library browsing endpoints
use crate::{api::response::Envelope, error::Result, state::AppState};
use axum::{extract::State, Json};

/// /rest/getMusicFolders
pub async fn get_music_folders(State(app_state): State<AppState>) -> Result<Json<Envelope>> {
    let folders = app_state.coordinator.music_folders()?;
    Ok(Json(Envelope::ok().with_music_folders(folders)))
}
