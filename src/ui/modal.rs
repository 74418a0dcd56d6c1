use serde::Serialize;

use crate::domain::{Product, format_price};
use crate::engine::Action;
use crate::ui::bindings::{BindingTable, ElementId, Scope, Trigger};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{attr_escape, html_escape};

/// What the page's package modal needs to show a product.
/// Serialized as-is into the page's `packageData` map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDetail {
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
}

impl PackageDetail {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format_price(product.price),
            images: product
                .image_locations()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Full-size video modal with a close control.
pub fn video_modal(modal_id: &ElementId, video: &str) -> (String, BindingTable) {
    let content = modal_id.child("content");
    let close = modal_id.child("close");

    let html = format!(
        r#"<div class="video-modal" id="{modal_id}">
    <div class="video-modal-content" id="{content}">
        <span class="video-close" id="{close}">{close_text}</span>
        <video controls autoplay style="width: 100%; max-width: 800px;">
            <source src="{src}" type="video/mp4">
            {unsupported}
        </video>
    </div>
</div>"#,
        close_text = UI_TEXT.close,
        src = attr_escape(video),
        unsupported = html_escape(UI_TEXT.video_unsupported),
    );

    let mut bindings = BindingTable::new();
    bindings.set_parent(&content, modal_id);
    bindings.set_parent(&close, &content);
    bindings.bind(
        &close,
        Trigger::Click,
        Action::CloseOverlay(modal_id.clone()),
        Scope::Absorbing,
    );
    (html, bindings)
}
