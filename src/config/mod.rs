//! Configuration module for the gallery.

pub mod debug;
pub use debug::{DEBUG_FLAGS, DebugFlags};

pub mod gallery;
pub mod media;
pub mod storage;

// Re-export commonly used items
pub use gallery::{GALLERY, GalleryConfig, PriceSliderConfig};
pub use media::{MEDIA, MediaConfig};
pub use storage::{STORAGE, StorageSlots};
