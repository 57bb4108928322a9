/// API route modules
pub mod annotation;
pub mod browsing;
pub mod health;
pub mod params;
pub mod response;
pub mod system;

use crate::state::AppState;
use axum::{
    handler::Handler,
    routing::{get, MethodRouter},
    Router,
};

/// Build the application router
///
/// Every Subsonic endpoint answers GET and POST, with and without the
/// `.view` suffix older clients append.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .merge(rest("ping", system::ping))
        .merge(rest("getMusicFolders", browsing::get_music_folders))
        .merge(rest("setRating", annotation::set_rating))
        .merge(rest("star", annotation::star))
        .merge(rest("unstar", annotation::unstar))
        .merge(rest("scrobble", annotation::scrobble))
        .with_state(app_state)
}

fn rest<H, T>(name: &str, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let method_router: MethodRouter<AppState> = get(handler.clone()).post(handler);
    Router::new()
        .route(&format!("/rest/{}", name), method_router.clone())
        .route(&format!("/rest/{}.view", name), method_router)
}
