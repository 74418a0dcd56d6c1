// Media showcase: the static list of gallery images/videos and its lightbox
pub mod gallery;
pub mod loader;

pub use gallery::{lightbox, render_media_gallery, RenderedMedia};
pub use loader::{MediaFile, MediaKind, default_media_files, display_title};
