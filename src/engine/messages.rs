use crate::domain::CategoryFilter;
use crate::media::MediaKind;
use crate::ui::bindings::ElementId;

/// What an interactive element asks the engine to do.
/// Built during render and stored against element ids in the binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the detail modal for a product
    OpenDetail { product_id: String },
    ToggleWishlist { product_id: String },
    /// Re-derive card visibility from a category
    FilterCategory(CategoryFilter),
    /// Re-derive card visibility from the slider; the value comes with the input event
    FilterPrice,
    /// Full-size video modal for a product
    PlayProductVideo { product_id: String },
    /// Hover preview: start muted playback, hide the play icon
    StartPreview {
        video: ElementId,
        icon: Option<ElementId>,
    },
    /// Hover preview ended: pause, rewind, show the play icon again
    StopPreview {
        video: ElementId,
        icon: Option<ElementId>,
    },
    OpenLightbox { path: String, kind: MediaKind },
    /// Remove a modal/lightbox from the page
    CloseOverlay(ElementId),
}
