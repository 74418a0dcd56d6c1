/// Visitor-facing strings
pub struct UiText {
    pub wishlist_added: &'static str,
    pub wishlist_removed: &'static str,
    pub heart_filled: &'static str,
    pub heart_outline: &'static str,
    pub video_indicator: &'static str,
    pub features_heading: &'static str,
    pub more_like_this: &'static str,
    pub all_products: &'static str,
    pub price_label: &'static str,
    pub close: &'static str,
    pub video_unsupported: &'static str,
    pub play_icon: &'static str,
    pub expand_icon: &'static str,
    pub lightbox_alt: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    wishlist_added: "Added to wishlist!",
    wishlist_removed: "Removed from wishlist",
    heart_filled: "❤️",
    heart_outline: "🤍",
    video_indicator: "🎥",
    features_heading: "Features:",
    more_like_this: "more like this...",
    all_products: "All Products",
    price_label: "Price:",
    close: "×",
    video_unsupported: "Your browser does not support the video tag.",
    play_icon: "▶️",
    expand_icon: "🔍",
    lightbox_alt: "Gallery Image",
};
