/// Rating, starring and scrobbling endpoints
use crate::{api::params::SubsonicParams, api::response::Envelope, error::Result, state::AppState};
use axum::{extract::State, Json};

/// /rest/setRating - `id`, `rating`
pub async fn set_rating(
    State(app_state): State<AppState>,
    SubsonicParams(params): SubsonicParams,
) -> Result<Json<Envelope>> {
    app_state.coordinator.rate(&params).await?;
    Ok(Json(Envelope::ok()))
}

/// /rest/star - any of `id`, `albumId`, `artistId`, repeatable
pub async fn star(
    State(app_state): State<AppState>,
    SubsonicParams(params): SubsonicParams,
) -> Result<Json<Envelope>> {
    app_state.coordinator.star(&params).await?;
    Ok(Json(Envelope::ok()))
}

/// /rest/unstar - any of `id`, `albumId`, `artistId`, repeatable
pub async fn unstar(
    State(app_state): State<AppState>,
    SubsonicParams(params): SubsonicParams,
) -> Result<Json<Envelope>> {
    app_state.coordinator.unstar(&params).await?;
    Ok(Json(Envelope::ok()))
}

/// /rest/scrobble - `id` (repeatable), `time`, `submission`, `c`, `u`
///
/// Acknowledged once the request validates, even if some items failed.
pub async fn scrobble(
    State(app_state): State<AppState>,
    SubsonicParams(params): SubsonicParams,
) -> Result<Json<Envelope>> {
    let report = app_state.coordinator.scrobble(&params).await?;
    tracing::debug!(
        accepted = report.accepted(),
        skipped = report.skipped(),
        "Scrobble request handled"
    );
    Ok(Json(Envelope::ok()))
}
