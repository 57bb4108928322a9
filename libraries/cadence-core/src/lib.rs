//! Cadence Core
//!
//! Annotation and scrobble coordination for a music server.
//!
//! This crate records engagement signals (ratings, stars, playback
//! submissions, now-playing notifications) against library items. Storage
//! and configuration are reached through the traits in [`traits`].
//!
//! # Architecture
//!
//! - **Parameter extraction**: [`RequestParams`] coerces raw request values
//! - **Folder registry**: [`ConfiguredFolderRegistry`] serves the library roots
//! - **Coordinator**: [`AnnotationCoordinator`] validates, dispatches and maps errors
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_core::{AnnotationCoordinator, RequestParams};
//!
//! # async fn example(coordinator: AnnotationCoordinator) {
//! let params = RequestParams::new().with("id", "track-1").with("rating", "5");
//! if let Err(err) = coordinator.rate(&params).await {
//!     eprintln!("{} ({})", err.message, err.code());
//! }
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod annotation;
pub mod error;
pub mod folders;
pub mod params;
pub mod traits;
pub mod types;

pub use annotation::{AnnotationCoordinator, ApiError, ApiResult, ErrorKind, ScrobbleReport};
pub use error::{CoreError, Result};
pub use folders::{ConfiguredFolderRegistry, FolderSettings, LibrarySettings};
pub use params::RequestParams;
pub use traits::{FolderRegistry, RatingService, ScrobbleService};

pub use types::{
    Annotation, ItemKind, LibraryItem, MediaFolder, MediaFolderId, NowPlayingEntry, PlayerId,
    Rating, ScrobbleEvent, Scrobbled,
};
