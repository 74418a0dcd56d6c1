//! Product card markup.
//!
//! Each call appends its cards after whatever the grid already holds, so
//! statically authored cards stay in place. Calling twice renders the dynamic
//! cards twice; element ids stay unique because they come from a running
//! sequence owned by the caller.

use itertools::Itertools;

use crate::config::GALLERY;
use crate::domain::{CategoryFilter, Product, format_price};
use crate::engine::Action;
use crate::error::{GalleryError, GalleryResult};
use crate::ui::bindings::{BindingTable, ElementId, Scope, Trigger};
use crate::ui::host::PageHost;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{attr_escape, html_escape};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_RENDER_STATS;

/// Handles to one rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub card: ElementId,
    pub heart: ElementId,
    pub product_id: String,
    /// `data-category` value, `"all"` for uncategorised products
    pub category_key: &'static str,
    pub price_text: String,
}

/// Markup plus everything needed to wire it up
#[derive(Debug, Clone, Default)]
pub struct RenderedGrid {
    pub html: String,
    pub cards: Vec<RenderedCard>,
    pub bindings: BindingTable,
}

/// Id root of the card rendered at position `seq`
pub fn card_id(seq: usize) -> ElementId {
    ElementId::new(format!("vp-card-{seq}"))
}

/// Build markup for `products`, numbering cards from `first_seq`.
pub fn render_cards(products: &[Product], first_seq: usize) -> RenderedGrid {
    let mut grid = RenderedGrid::default();
    let mut fragments = Vec::with_capacity(products.len());

    for (offset, product) in products.iter().enumerate() {
        let card = card_id(first_seq + offset);
        let (html, rendered) = render_card(product, &card, &mut grid.bindings);
        fragments.push(html);
        grid.cards.push(rendered);
    }

    grid.html = fragments.join("\n");
    grid
}

/// Append cards for `products` to the render target. Cards already in the
/// grid are left untouched.
pub fn render_into<H: PageHost>(
    products: &[Product],
    host: &mut H,
    first_seq: usize,
) -> GalleryResult<RenderedGrid> {
    let grid = render_cards(products, first_seq);
    if !host.append_html(GALLERY.grid_selector, &grid.html) {
        return Err(GalleryError::RenderTargetMissing(
            GALLERY.grid_selector.to_string(),
        ));
    }

    #[cfg(debug_assertions)]
    if PRINT_RENDER_STATS {
        log::info!(
            "Rendered {} dynamic cards ({} bytes of markup)",
            grid.cards.len(),
            grid.html.len()
        );
    }
    Ok(grid)
}

fn render_card(
    product: &Product,
    card: &ElementId,
    bindings: &mut BindingTable,
) -> (String, RenderedCard) {
    let image = card.child("image");
    let heart = card.child("heart");
    let content = card.child("content");
    let more = card.child("more");

    let filter = CategoryFilter::for_product(product.category);
    let price_text = format_price(product.price);
    let name = html_escape(&product.name);
    let name_attr = attr_escape(&product.name);
    let id_attr = attr_escape(&product.id);
    let cover = attr_escape(product.primary_image().src_or_placeholder());

    let badge = product
        .category
        .map(|category| {
            format!(
                "\n        <span class=\"category-badge\">{}</span>",
                html_escape(category.label())
            )
        })
        .unwrap_or_default();

    let video = product
        .video()
        .map(|src| render_video(card, src, product, bindings))
        .unwrap_or_default();

    let features = if product.features.is_empty() {
        String::new()
    } else {
        let items = product
            .features
            .iter()
            .map(|feature| format!("<li>{}</li>", html_escape(feature)))
            .join("");
        format!(
            "\n        <div class=\"product-features\">\n            <h4>{}</h4>\n            <ul>{items}</ul>\n        </div>",
            UI_TEXT.features_heading
        )
    };

    let html = format!(
        r#"<div class="etsy-card product-card" id="{card}" data-category="{category}" data-product-id="{id_attr}">
    <div class="etsy-card-image" id="{image}">
        <img src="{cover}" alt="{name_attr}">{badge}{video}
        <button class="etsy-heart wishlist-btn" id="{heart}" data-product-id="{id_attr}">{heart_icon}</button>
    </div>
    <div class="etsy-card-content" id="{content}">
        <h3 class="etsy-title">{name}</h3>{features}
        <div class="etsy-price price">{price_text}</div>
        <div class="etsy-seller">{seller}</div>
        <div class="etsy-more" id="{more}">{more_text}</div>
    </div>
</div>"#,
        category = filter.key(),
        heart_icon = UI_TEXT.heart_outline,
        seller = html_escape(GALLERY.seller),
        more_text = UI_TEXT.more_like_this,
    );

    bindings.set_parent(&image, card);
    bindings.set_parent(&heart, &image);
    bindings.set_parent(&content, card);
    bindings.set_parent(&more, &content);
    bindings.bind(
        &image,
        Trigger::Click,
        Action::OpenDetail {
            product_id: product.id.clone(),
        },
        Scope::Bubbling,
    );
    bindings.bind(
        &heart,
        Trigger::Click,
        Action::ToggleWishlist {
            product_id: product.id.clone(),
        },
        Scope::Absorbing,
    );
    bindings.bind(&more, Trigger::Click, Action::FilterCategory(filter), Scope::Bubbling);

    let rendered = RenderedCard {
        card: card.clone(),
        heart,
        product_id: product.id.clone(),
        category_key: filter.key(),
        price_text,
    };
    (html, rendered)
}

// Hover preview region plus the indicator that opens the full video modal.
fn render_video(
    card: &ElementId,
    src: &str,
    product: &Product,
    bindings: &mut BindingTable,
) -> String {
    let image = card.child("image");
    let overlay = card.child("overlay");
    let video = card.child("video");
    let indicator = card.child("indicator");

    bindings.set_parent(&overlay, &image);
    bindings.set_parent(&video, &overlay);
    bindings.set_parent(&indicator, &image);
    bindings.bind(
        &overlay,
        Trigger::PointerEnter,
        Action::StartPreview {
            video: video.clone(),
            icon: None,
        },
        Scope::Bubbling,
    );
    bindings.bind(
        &overlay,
        Trigger::PointerLeave,
        Action::StopPreview {
            video: video.clone(),
            icon: None,
        },
        Scope::Bubbling,
    );
    bindings.absorb(&video, Trigger::Click);
    bindings.bind(
        &indicator,
        Trigger::Click,
        Action::PlayProductVideo {
            product_id: product.id.clone(),
        },
        Scope::Absorbing,
    );

    format!(
        r#"
        <div class="video-overlay" id="{overlay}">
            <video class="product-video" id="{video}" muted loop playsinline>
                <source src="{src}" type="video/mp4">
            </video>
        </div>
        <div class="video-indicator" id="{indicator}">{icon}</div>"#,
        src = attr_escape(src),
        icon = UI_TEXT.video_indicator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_products;
    use crate::domain::{Category, ImageRef};
    use crate::ui::host::MemoryPage;

    fn product(id: &str, price: f64, category: Option<Category>) -> Product {
        Product {
            id: id.into(),
            name: format!("Lamp {id}"),
            price,
            category,
            description: None,
            best_for: None,
            features: Vec::new(),
            images: vec![ImageRef::Real(format!("{id}.webp"))],
            video: None,
        }
    }

    #[test]
    fn default_card_markup() {
        let grid = render_cards(&default_products(), 0);
        let html = &grid.html;
        assert!(html.contains(r#"id="vp-card-0" data-category="wall-sconces""#));
        assert!(html.contains("KES 2200.00"));
        assert!(html.contains(r#"<span class="category-badge">Wall Sconces</span>"#));
        assert!(html.contains("<li>Natural jute rope accent</li><li>Vintage filament bulb included</li>"));
        assert!(!html.contains("video-overlay"));
        assert_eq!(grid.cards[0].category_key, "wall-sconces");
        assert_eq!(grid.cards[0].price_text, "KES 2200.00");
    }

    #[test]
    fn uncategorised_cards_filter_to_all() {
        let grid = render_cards(&[product("u", 10.0, None)], 3);
        assert!(grid.html.contains(r#"data-category="all""#));
        assert!(!grid.html.contains("category-badge"));
        assert_eq!(
            grid.bindings.resolve(&card_id(3).child("more"), Trigger::Click),
            vec![Action::FilterCategory(CategoryFilter::All)]
        );
    }

    #[test]
    fn text_is_escaped() {
        let mut odd = product("x\"y", 1.0, None);
        odd.name = "<b>Bold</b> & \"quoted\"".into();
        let html = render_cards(&[odd], 0).html;
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; \"quoted\""));
        assert!(html.contains(r#"data-product-id="x&quot;y""#));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn heart_and_video_controls_do_not_open_detail() {
        let mut with_video = product("v", 10.0, Some(Category::TableLamps));
        with_video.video = Some("clips/v.mp4".into());
        let grid = render_cards(&[with_video], 0);
        let card = card_id(0);

        assert_eq!(
            grid.bindings.resolve(&card.child("heart"), Trigger::Click),
            vec![Action::ToggleWishlist { product_id: "v".into() }]
        );
        assert!(grid.bindings.resolve(&card.child("video"), Trigger::Click).is_empty());
        assert_eq!(
            grid.bindings.resolve(&card.child("indicator"), Trigger::Click),
            vec![Action::PlayProductVideo { product_id: "v".into() }]
        );
        // A click on the overlay itself (outside the video) is still the image region
        assert_eq!(
            grid.bindings.resolve(&card.child("overlay"), Trigger::Click),
            vec![Action::OpenDetail { product_id: "v".into() }]
        );
        assert_eq!(
            grid.bindings.resolve(&card.child("overlay"), Trigger::PointerEnter),
            vec![Action::StartPreview { video: card.child("video"), icon: None }]
        );
        assert!(grid.html.contains("muted loop playsinline"));
    }

    #[test]
    fn render_appends_after_static_content() {
        let static_html = r#"<div class="product-card" data-category="chandeliers">static</div>"#;
        let mut page = MemoryPage::new().with_container(GALLERY.grid_selector, static_html);
        let products = vec![product("a", 1.0, None), product("b", 2.0, None)];

        let grid = render_into(&products, &mut page, 0).unwrap();
        let content = page.container(GALLERY.grid_selector).unwrap();
        assert!(content.len() >= static_html.len());
        assert!(content.starts_with(static_html));
        let a = content.find(r#"id="vp-card-0""#).unwrap();
        let b = content.find(r#"id="vp-card-1""#).unwrap();
        assert!(a < b);
        assert_eq!(grid.cards.len(), 2);
    }

    #[test]
    fn second_render_duplicates_with_fresh_ids() {
        let mut page = MemoryPage::new().with_container(GALLERY.grid_selector, "");
        let products = vec![product("a", 1.0, None)];
        render_into(&products, &mut page, 0).unwrap();
        render_into(&products, &mut page, 1).unwrap();
        let content = page.container(GALLERY.grid_selector).unwrap();
        assert_eq!(content.matches(r#"data-product-id="a""#).count(), 4);
        assert!(content.contains(r#"id="vp-card-1""#));
        // Appends never rebuild the grid's existing children
        assert!(page.replaced.is_empty());
    }

    #[test]
    fn missing_target_is_an_error() {
        let mut page = MemoryPage::new();
        let err = render_into(&default_products(), &mut page, 0).unwrap_err();
        assert_eq!(err, GalleryError::RenderTargetMissing(".gallery-grid".into()));
    }
}
