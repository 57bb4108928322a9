/// Shared application state
use cadence_core::AnnotationCoordinator;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub coordinator: Arc<AnnotationCoordinator>,
}

impl AppState {
    pub fn new(coordinator: Arc<AnnotationCoordinator>) -> Self {
        Self { coordinator }
    }
}
