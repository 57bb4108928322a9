//! Annotation coordinator
//!
//! Turns loosely typed request parameters into calls on the rating and
//! scrobble collaborators and maps their failures onto [`ApiError`].
//!
//! Rating and starring are confirmable user actions: the first collaborator
//! error fails the request. Scrobbling is best-effort telemetry: once the
//! request validates, per-item failures are logged, recorded in the
//! [`ScrobbleReport`] and the request is still acknowledged.

mod error;
mod report;

pub use error::{ApiError, ApiResult, ErrorKind};
pub use report::{ItemOutcome, ScrobbleReport};

use crate::error::CoreError;
use crate::params::RequestParams;
use crate::traits::{FolderRegistry, RatingService, ScrobbleService};
use crate::types::{MediaFolder, PlayerId, ScrobbleEvent};
use chrono::Utc;
use std::sync::Arc;

const MISSING_ID: &str = "Required id parameter is missing";
const MISSING_RATING: &str = "Required rating parameter is missing";

/// Stateless coordinator shared by all requests
#[derive(Clone)]
pub struct AnnotationCoordinator {
    ratings: Arc<dyn RatingService>,
    scrobbler: Arc<dyn ScrobbleService>,
    folders: Arc<dyn FolderRegistry>,
}

impl AnnotationCoordinator {
    pub fn new(
        ratings: Arc<dyn RatingService>,
        scrobbler: Arc<dyn ScrobbleService>,
        folders: Arc<dyn FolderRegistry>,
    ) -> Self {
        Self {
            ratings,
            scrobbler,
            folders,
        }
    }

    /// Set the rating of one item (`id`, `rating`)
    pub async fn rate(&self, params: &RequestParams) -> ApiResult<()> {
        let id = params.required_string("id", MISSING_ID)?;
        let rating = params.required_int("rating", MISSING_RATING)?;

        tracing::debug!(rating, id = %id, "Setting rating");
        self.ratings
            .set_rating(&id, rating)
            .await
            .map_err(|err| map_collaborator_error("Error setting rating", err))
    }

    /// Star every item named by `id`, `albumId` and `artistId`
    pub async fn star(&self, params: &RequestParams) -> ApiResult<()> {
        let ids = batch_ids(params)?;
        self.set_starred(true, &ids).await
    }

    /// Unstar every item named by `id`, `albumId` and `artistId`
    pub async fn unstar(&self, params: &RequestParams) -> ApiResult<()> {
        let ids = batch_ids(params)?;
        self.set_starred(false, &ids).await
    }

    /// Star or unstar a batch in one collaborator call
    ///
    /// An empty batch is a no-op.
    pub async fn set_starred(&self, starred: bool, ids: &[String]) -> ApiResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        tracing::debug!(?ids, starred, "Changing starred");
        self.ratings
            .set_star(starred, ids)
            .await
            .map_err(|err| map_collaborator_error("Error changing starred", err))
    }

    /// Submit plays or now-playing updates for every `id`
    ///
    /// Only validation failures are returned as errors. The report lists
    /// what happened to each item.
    pub async fn scrobble(&self, params: &RequestParams) -> ApiResult<ScrobbleReport> {
        let ids = params.required_strings("id", MISSING_ID)?;
        let time_count = params.strings("time").len();
        if time_count > 0 && time_count != ids.len() {
            return Err(ApiError::invalid_argument(format!(
                "Wrong number of timestamps: {}, should be {}",
                time_count,
                ids.len()
            )));
        }
        let times = params.times("time")?;
        let submission = params.bool_or("submission", true);
        let player_id = PlayerId::DEFAULT;
        let player_name = params.string("c");
        let username = params.string("u");

        tracing::debug!(?ids, ?times, submission, "Scrobbling tracks");
        let mut report = ScrobbleReport::default();
        for (i, id) in ids.into_iter().enumerate() {
            let event = ScrobbleEvent {
                target_id: id,
                player_id,
                player_name: player_name.clone(),
                username: username.clone(),
                timestamp: times.get(i).copied().unwrap_or_else(Utc::now),
                is_submission: submission,
            };
            let outcome = match self.dispatch(&event).await {
                Ok(()) => ItemOutcome::Accepted,
                Err(err) => {
                    if event.is_submission {
                        tracing::error!(id = %event.target_id, error = %err, "Error scrobbling track");
                    } else {
                        tracing::error!(id = %event.target_id, error = %err, "Error setting current song");
                    }
                    ItemOutcome::Skipped {
                        reason: err.to_string(),
                    }
                }
            };
            report.record(event, outcome);
        }

        if report.skipped() > 0 {
            tracing::warn!(
                "Scrobble request acknowledged with {} of {} items skipped",
                report.skipped(),
                report.items.len()
            );
        }
        Ok(report)
    }

    /// All configured library folders
    pub fn music_folders(&self) -> ApiResult<Vec<MediaFolder>> {
        self.folders.get_all().map_err(|err| {
            tracing::error!(error = %err, "Error listing media folders");
            ApiError::internal()
        })
    }

    async fn dispatch(&self, event: &ScrobbleEvent) -> crate::Result<()> {
        if event.is_submission {
            self.scrobbler
                .register(event.player_id, &event.target_id, event.timestamp)
                .await?;
        } else {
            self.scrobbler
                .now_playing(
                    event.player_id,
                    &event.player_name,
                    &event.target_id,
                    &event.username,
                )
                .await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for AnnotationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationCoordinator").finish_non_exhaustive()
    }
}

/// `id`, then `albumId`, then `artistId`
fn batch_ids(params: &RequestParams) -> ApiResult<Vec<String>> {
    let mut ids = params.strings("id");
    ids.extend(params.strings("albumId"));
    ids.extend(params.strings("artistId"));
    if ids.is_empty() {
        return Err(ApiError::missing_parameter(MISSING_ID));
    }
    Ok(ids)
}

/// Log `err` under `message` and map it to the client-facing kind
fn map_collaborator_error(message: &'static str, err: CoreError) -> ApiError {
    tracing::error!(error = %err, "{}", message);
    if err.is_not_found() {
        ApiError::data_not_found()
    } else {
        ApiError::internal()
    }
}
