#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use data::{CatalogStore, KeyValueStore, MemoryStore, Wishlist};
pub use domain::{Category, CategoryFilter, ImageRef, Product};
pub use engine::{Action, GalleryEngine};
pub use error::{GalleryError, GalleryResult};
pub use ui::{MemoryPage, PageHost};

#[cfg(not(target_arch = "wasm32"))]
pub use data::JsonFileStore;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

/// Render the gallery page against a storage snapshot, without a browser.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON object of storage slots (a localStorage snapshot). Wishlist writes go back to it.
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Markup of statically authored cards to place in the grid before rendering
    #[arg(long)]
    pub static_cards: Option<PathBuf>,

    /// Also render the media gallery section
    #[arg(long, default_value_t = false)]
    pub media: bool,

    /// Where to write the rendered page
    #[arg(long, default_value = "gallery_preview.html")]
    pub out: PathBuf,
}
