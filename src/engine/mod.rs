pub mod core;
pub mod messages;

// Re-export key components
pub use core::GalleryEngine;
pub use messages::Action;
