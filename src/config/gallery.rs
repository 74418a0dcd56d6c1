//! Page wiring and display constants for the product gallery.

/// Price slider domain shown in the filter bar
pub struct PriceSliderConfig {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    /// Value the slider starts on (nothing hidden)
    pub initial: u32,
}

impl PriceSliderConfig {
    /// Bound an arbitrary value to the slider range. Values between steps are
    /// kept as given.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// The Master Gallery Configuration
pub struct GalleryConfig {
    /// Render target: container the dynamic cards are appended into
    pub grid_selector: &'static str,
    /// Section that hosts the filter bar (inserted just before the grid)
    pub section_selector: &'static str,
    /// Container for the media gallery
    pub media_selector: &'static str,
    /// Element id of the label that mirrors the slider value
    pub price_label_id: &'static str,
    /// Element id of the price slider input
    pub price_slider_id: &'static str,
    /// Currency label prefixed to every displayed price
    pub currency: &'static str,
    /// Seller line printed on every card
    pub seller: &'static str,
    /// Delay between page-ready and the first render, lets static content settle
    pub render_delay_ms: i32,
    /// How long a toast stays on screen
    pub toast_duration_ms: i32,
    pub price_slider: PriceSliderConfig,
}

pub const GALLERY: GalleryConfig = GalleryConfig {
    grid_selector: ".gallery-grid",
    section_selector: "#gallery",
    media_selector: "#mediaGallery",
    price_label_id: "priceValue",
    price_slider_id: "priceFilter",
    currency: "KES",
    seller: "VPOWER Lighting & Decor",
    render_delay_ms: 100,
    toast_duration_ms: 3000,
    price_slider: PriceSliderConfig {
        min: 0,
        max: 50_000,
        step: 1000,
        initial: 50_000,
    },
};
