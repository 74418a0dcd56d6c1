// User interface components
pub mod bindings;
pub mod config;
pub mod filters;
pub mod host;
pub mod modal;
pub mod ui_render;
pub mod ui_text;

// Browser host (live document)
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use bindings::{BindingTable, ElementId, Scope, Trigger};
pub use config::UI_CONFIG;
pub use filters::{CardEntry, CardIndex};
pub use host::{GalleryHost, MemoryPage, ModalOpener, Notifier, PageHost, Severity};
pub use modal::PackageDetail;
pub use ui_render::{RenderedCard, RenderedGrid, render_cards};
