/// System endpoints
use crate::api::response::Envelope;
use axum::Json;

/// /rest/ping - connectivity check
pub async fn ping() -> Json<Envelope> {
    Json(Envelope::ok())
}
