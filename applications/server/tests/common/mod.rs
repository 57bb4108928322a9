/// Common test utilities and fixtures
use axum::Router;
use cadence_core::{AnnotationCoordinator, ConfiguredFolderRegistry, LibraryItem, LibrarySettings};
use cadence_server::{api, state::AppState};
use cadence_storage::LocalAnnotationStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const MUSIC_FOLDER: &str = "/srv/music";

/// Router backed by a real SQLite file, with a small seeded catalog
pub struct TestApp {
    pub router: Router,
    pub store: Arc<LocalAnnotationStore>,
    _temp_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let pool = cadence_storage::create_pool(&db_url).await.unwrap();
    cadence_storage::run_migrations(&pool).await.unwrap();

    for item in fixtures::catalog() {
        cadence_storage::library_items::insert(&pool, &item)
            .await
            .unwrap();
    }

    let store = Arc::new(LocalAnnotationStore::new(pool));
    let folders = Arc::new(ConfiguredFolderRegistry::new(&LibrarySettings {
        music_folder: PathBuf::from(MUSIC_FOLDER),
        folders: vec![],
    }));
    let coordinator = AnnotationCoordinator::new(store.clone(), store.clone(), folders);

    TestApp {
        router: api::router(AppState::new(Arc::new(coordinator))),
        store,
        _temp_dir: temp_dir,
    }
}

pub mod fixtures {
    use super::LibraryItem;

    pub fn catalog() -> Vec<LibraryItem> {
        vec![
            LibraryItem::album("al1"),
            LibraryItem::track("t1", Some("al1".to_string())),
            LibraryItem::track("t2", Some("al1".to_string())),
            LibraryItem::artist("ar1"),
        ]
    }
}
