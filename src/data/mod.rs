// Persistent slots, catalog loading and the wishlist
pub mod catalog_store;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod store;
pub mod wishlist;

// Re-export commonly used types
pub use catalog_store::{CatalogStore, default_products};
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
pub use store::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore};
pub use wishlist::{ToggleOutcome, Wishlist};
