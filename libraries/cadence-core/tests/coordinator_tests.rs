//! Annotation coordinator tests
//! Drives the coordinator against recording collaborator stubs

use async_trait::async_trait;
use cadence_core::annotation::ItemOutcome;
use cadence_core::{
    AnnotationCoordinator, ConfiguredFolderRegistry, CoreError, ErrorKind, LibrarySettings,
    NowPlayingEntry, PlayerId, Rating, RatingService, RequestParams, Result, ScrobbleService,
    Scrobbled,
};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetRating(String, Rating),
    SetStar(bool, Vec<String>),
    Register(PlayerId, String, DateTime<Utc>),
    NowPlaying(PlayerId, String, String, String),
}

/// Collaborator stub recording every call
///
/// Fails calls whose id is listed in `failing`, with `NotFound` when the id
/// is also listed in `missing`.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
    failing: Vec<String>,
    missing: Vec<String>,
}

impl Recorder {
    fn failing_on(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        }
    }

    fn missing(ids: &[&str]) -> Self {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        Self {
            failing: ids.clone(),
            missing: ids,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self, id: &str) -> Result<()> {
        if self.missing.iter().any(|m| m == id) {
            return Err(CoreError::not_found("Item", id));
        }
        if self.failing.iter().any(|f| f == id) {
            return Err(CoreError::storage("database is locked at /var/lib/cadence.db"));
        }
        Ok(())
    }
}

#[async_trait]
impl RatingService for Recorder {
    async fn set_rating(&self, id: &str, rating: Rating) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::SetRating(id.to_string(), rating));
        self.outcome(id)
    }

    async fn set_star(&self, starred: bool, ids: &[String]) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::SetStar(starred, ids.to_vec()));
        ids.iter().try_for_each(|id| self.outcome(id))
    }
}

#[async_trait]
impl ScrobbleService for Recorder {
    async fn register(&self, player_id: PlayerId, id: &str, at: DateTime<Utc>) -> Result<Scrobbled> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Register(player_id, id.to_string(), at));
        self.outcome(id)?;
        Ok(Scrobbled {
            track_id: id.to_string(),
            played_at: at,
            play_count: 1,
        })
    }

    async fn now_playing(
        &self,
        player_id: PlayerId,
        player_name: &str,
        id: &str,
        username: &str,
    ) -> Result<NowPlayingEntry> {
        self.calls.lock().unwrap().push(Call::NowPlaying(
            player_id,
            player_name.to_string(),
            id.to_string(),
            username.to_string(),
        ));
        self.outcome(id)?;
        Ok(NowPlayingEntry {
            track_id: id.to_string(),
            player_id,
            player_name: player_name.to_string(),
            username: username.to_string(),
            started_at: Utc::now(),
        })
    }
}

fn coordinator(recorder: &Arc<Recorder>) -> AnnotationCoordinator {
    let folders = ConfiguredFolderRegistry::new(&LibrarySettings {
        music_folder: PathBuf::from("/music"),
        folders: vec![],
    });
    AnnotationCoordinator::new(recorder.clone(), recorder.clone(), Arc::new(folders))
}

fn params(pairs: &[(&str, &str)]) -> RequestParams {
    pairs.iter().copied().collect()
}

#[tokio::test]
async fn test_rate_sets_rating() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder)
        .rate(&params(&[("id", "t1"), ("rating", "4")]))
        .await
        .unwrap();

    assert_eq!(recorder.calls(), vec![Call::SetRating("t1".to_string(), 4)]);
}

#[tokio::test]
async fn test_rate_missing_parameters_never_calls_collaborator() {
    let recorder = Arc::new(Recorder::default());
    let coordinator = coordinator(&recorder);

    for request in [params(&[("rating", "3")]), params(&[("id", "t1")]), params(&[])] {
        let err = coordinator.rate(&request).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingParameter);
    }

    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_rate_does_not_range_check() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder)
        .rate(&params(&[("id", "t1"), ("rating", "9")]))
        .await
        .unwrap();

    assert_eq!(recorder.calls(), vec![Call::SetRating("t1".to_string(), 9)]);
}

#[tokio::test]
async fn test_rate_not_found_maps_to_data_not_found() {
    let recorder = Arc::new(Recorder::missing(&["ghost"]));

    let err = coordinator(&recorder)
        .rate(&params(&[("id", "ghost"), ("rating", "2")]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DataNotFound);
    assert_eq!(err.code(), 70);
}

#[tokio::test]
async fn test_rate_other_error_is_internal_without_details() {
    let recorder = Arc::new(Recorder::failing_on(&["t1"]));

    let err = coordinator(&recorder)
        .rate(&params(&[("id", "t1"), ("rating", "2")]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(err.message, "Internal Error");
    assert!(!err.message.contains("database"));
}

#[tokio::test]
async fn test_star_concatenates_sources_in_one_call() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder)
        .star(&params(&[("id", "a"), ("albumId", "b"), ("artistId", "c")]))
        .await
        .unwrap();

    assert_eq!(
        recorder.calls(),
        vec![Call::SetStar(
            true,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        )]
    );
}

#[tokio::test]
async fn test_star_and_unstar_without_ids_are_missing_parameter() {
    let recorder = Arc::new(Recorder::default());
    let coordinator = coordinator(&recorder);

    let err = coordinator.star(&params(&[])).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingParameter);

    let err = coordinator
        .unstar(&params(&[("id", ""), ("albumId", "")]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingParameter);

    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_unstar_from_single_source() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder)
        .unstar(&params(&[("artistId", "ar1"), ("artistId", "ar2")]))
        .await
        .unwrap();

    assert_eq!(
        recorder.calls(),
        vec![Call::SetStar(false, vec!["ar1".to_string(), "ar2".to_string()])]
    );
}

#[tokio::test]
async fn test_set_starred_with_empty_batch_is_noop() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder).set_starred(true, &[]).await.unwrap();

    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_star_error_mapping() {
    let recorder = Arc::new(Recorder::missing(&["b"]));
    let err = coordinator(&recorder)
        .star(&params(&[("id", "a"), ("id", "b")]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DataNotFound);

    let recorder = Arc::new(Recorder::failing_on(&["a"]));
    let err = coordinator(&recorder)
        .unstar(&params(&[("id", "a")]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
}

#[tokio::test]
async fn test_scrobble_timestamp_count_mismatch() {
    let recorder = Arc::new(Recorder::default());

    let err = coordinator(&recorder)
        .scrobble(&params(&[("id", "x"), ("id", "y"), ("time", "1700000000000")]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert_eq!(err.message, "Wrong number of timestamps: 1, should be 2");
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_scrobble_unparseable_time_is_invalid_argument() {
    let recorder = Arc::new(Recorder::default());

    let err = coordinator(&recorder)
        .scrobble(&params(&[("id", "x"), ("time", "yesterday")]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert_eq!(err.message, "Invalid time parameter: yesterday");
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_scrobble_counts_unparseable_times_against_ids() {
    let recorder = Arc::new(Recorder::default());

    let err = coordinator(&recorder)
        .scrobble(&params(&[
            ("id", "x"),
            ("id", "y"),
            ("time", "bad"),
            ("time", "1700000000000"),
        ]))
        .await
        .unwrap_err();

    // Both times count toward the total, then the bad one is rejected
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert_eq!(err.message, "Invalid time parameter: bad");
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_scrobble_requires_ids() {
    let recorder = Arc::new(Recorder::default());

    let err = coordinator(&recorder)
        .scrobble(&params(&[("time", "1700000000000")]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingParameter);
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_scrobble_uses_supplied_times() {
    let recorder = Arc::new(Recorder::default());

    coordinator(&recorder)
        .scrobble(&params(&[
            ("id", "x"),
            ("id", "y"),
            ("time", "1700000000000"),
            ("time", "1700000200000"),
        ]))
        .await
        .unwrap();

    let expected: Vec<Call> = [("x", 1_700_000_000_000), ("y", 1_700_000_200_000)]
        .into_iter()
        .map(|(id, ms)| {
            Call::Register(
                PlayerId::DEFAULT,
                id.to_string(),
                DateTime::<Utc>::from_timestamp_millis(ms).unwrap(),
            )
        })
        .collect();
    assert_eq!(recorder.calls(), expected);
}

#[tokio::test]
async fn test_scrobble_continues_after_item_failure() {
    let recorder = Arc::new(Recorder::failing_on(&["x"]));
    let before = Utc::now();

    let report = coordinator(&recorder)
        .scrobble(&params(&[("id", "x"), ("id", "y")]))
        .await
        .unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    let times: Vec<DateTime<Utc>> = calls
        .iter()
        .map(|call| match call {
            Call::Register(player, _, at) => {
                assert_eq!(*player, PlayerId::DEFAULT);
                *at
            }
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert!(times[0] >= before);
    assert!(times[1] >= times[0]);

    assert_eq!(report.items.len(), 2);
    assert!(matches!(report.items[0].1, ItemOutcome::Skipped { .. }));
    assert_eq!(report.items[1].1, ItemOutcome::Accepted);
    assert_eq!(report.accepted(), 1);
    assert_eq!(report.skipped(), 1);
}

#[tokio::test]
async fn test_scrobble_now_playing() {
    let recorder = Arc::new(Recorder::default());

    let report = coordinator(&recorder)
        .scrobble(&params(&[
            ("id", "x"),
            ("submission", "false"),
            ("c", "DSub"),
            ("u", "alice"),
            ("time", "1700000000000"),
        ]))
        .await
        .unwrap();

    assert_eq!(
        recorder.calls(),
        vec![Call::NowPlaying(
            PlayerId::DEFAULT,
            "DSub".to_string(),
            "x".to_string(),
            "alice".to_string()
        )]
    );
    assert!(!report.items[0].0.is_submission);
}

#[tokio::test]
async fn test_scrobble_now_playing_failures_are_swallowed() {
    let recorder = Arc::new(Recorder::missing(&["x", "y"]));

    let report = coordinator(&recorder)
        .scrobble(&params(&[("id", "x"), ("id", "y"), ("submission", "0")]))
        .await
        .unwrap();

    assert_eq!(recorder.calls().len(), 2);
    assert_eq!(report.skipped(), 2);
}

#[tokio::test]
async fn test_music_folders() {
    let recorder = Arc::new(Recorder::default());

    let folders = coordinator(&recorder).music_folders().unwrap();

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].path, PathBuf::from("/music"));
}
