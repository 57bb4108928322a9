mod annotation;
mod ids;
mod media_folder;
mod scrobble;

pub use annotation::{Annotation, ItemKind, LibraryItem, Rating};
pub use ids::{MediaFolderId, PlayerId};
pub use media_folder::MediaFolder;
pub use scrobble::{NowPlayingEntry, ScrobbleEvent, Scrobbled};
