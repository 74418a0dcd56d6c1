use crate::config::{GALLERY, STORAGE};
use crate::data::{CatalogStore, KeyValueStore, ToggleOutcome, Wishlist};
use crate::domain::{CategoryFilter, Product, filter_displayable, find_product};
use crate::error::{GalleryError, GalleryResult};
use crate::media::{MediaFile, MediaKind, lightbox, render_media_gallery};
use crate::ui::bindings::{BindingTable, ElementId, Trigger};
use crate::ui::config::UI_CONFIG;
use crate::ui::filters::{
    CardEntry, CardIndex, apply_category_filter, apply_price_filter, filter_bar,
};
use crate::ui::host::{GalleryHost, PageHost, Severity};
use crate::ui::modal::{PackageDetail, video_modal};
use crate::ui::ui_render::render_into;
use crate::ui::ui_text::UI_TEXT;

use super::messages::Action;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// The gallery for one page session.
///
/// Owns the key-value store, the validated catalog and the wishlist, plus the
/// bookkeeping produced by rendering (card index, bindings, id sequences).
/// Built once when the page is ready and handed to every event.
pub struct GalleryEngine<S: KeyValueStore> {
    store: S,
    catalog: Vec<Product>,
    wishlist: Wishlist,

    /// Cards taking part in filtering
    cards: CardIndex,
    /// (heart button, product id) for every rendered card
    hearts: Vec<(ElementId, String)>,
    bindings: BindingTable,

    /// Next card sequence number (ids stay unique across repeated renders)
    next_card: usize,
    /// Next modal/lightbox sequence number
    next_overlay: usize,
    filters_installed: bool,
}

impl<S: KeyValueStore> GalleryEngine<S> {
    /// Load and validate the catalog and read the wishlist.
    pub fn new(store: S) -> Self {
        let catalog = Self::load_catalog(&store);
        let wishlist = Wishlist::load(&store);
        Self {
            store,
            catalog,
            wishlist,
            cards: CardIndex::new(),
            hearts: Vec::new(),
            bindings: BindingTable::new(),
            next_card: 0,
            next_overlay: 0,
            filters_installed: false,
        }
    }

    fn load_catalog(store: &S) -> Vec<Product> {
        let loaded = CatalogStore::load(store);
        let loaded_count = loaded.len();
        let catalog = filter_displayable(loaded);
        log::info!(
            "Catalog ready: {} products ({} filtered out for missing images)",
            catalog.len(),
            loaded_count - catalog.len()
        );
        catalog
    }

    // --- ACCESSORS ---

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn cards(&self) -> &CardIndex {
        &self.cards
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// A statically authored card joins category/price filtering.
    pub fn register_static_card(&mut self, entry: CardEntry) {
        self.cards.register(entry);
    }

    // --- PAGE LIFECYCLE ---

    /// Page-ready sequence: pick up the static cards present now, render cards,
    /// build the filter bar, reflect the wishlist.
    pub fn start<H: GalleryHost>(&mut self, host: &mut H) {
        for entry in host.static_cards() {
            self.register_static_card(entry);
        }
        self.render_products(host);
        self.install_filters(host);
        self.sync_wishlist_buttons(host);
    }

    /// Append the catalog's cards to the render target.
    /// Returns how many cards were rendered (0 when the target is missing).
    pub fn render_products<H: PageHost>(&mut self, host: &mut H) -> usize {
        match render_into(&self.catalog, host, self.next_card) {
            Ok(grid) => {
                self.next_card += grid.cards.len();
                self.cards.register_rendered(&grid.cards);
                self.hearts.extend(
                    grid.cards
                        .iter()
                        .map(|card| (card.heart.clone(), card.product_id.clone())),
                );
                self.bindings.extend(grid.bindings);
                if grid.cards.is_empty() {
                    log::info!("No dynamic products to render");
                }
                self.sync_wishlist_buttons(host);
                grid.cards.len()
            }
            Err(e) => {
                log::error!("Gallery render skipped: {e}");
                0
            }
        }
    }

    /// Insert the filter bar before the grid. Does nothing without the gallery
    /// section, or when the bar is already there.
    pub fn install_filters<H: PageHost>(&mut self, host: &mut H) -> bool {
        if self.filters_installed || !host.exists(GALLERY.section_selector) {
            return false;
        }
        let (html, bindings) = filter_bar();
        if !host.insert_before(GALLERY.grid_selector, &html) {
            log::warn!("Filter bar not installed: `{}` missing", GALLERY.grid_selector);
            return false;
        }
        self.bindings.extend(bindings);
        self.filters_installed = true;
        true
    }

    /// Fill the media gallery container (replacing its content).
    pub fn mount_media_gallery<H: PageHost>(&mut self, files: &[MediaFile], host: &mut H) -> bool {
        let rendered = render_media_gallery(files);
        if !host.set_container_html(GALLERY.media_selector, &rendered.html) {
            log::error!(
                "{}",
                GalleryError::RenderTargetMissing(GALLERY.media_selector.to_string())
            );
            return false;
        }
        self.bindings.extend(rendered.bindings);
        true
    }

    /// Re-read storage and render again (appends; debugging hook).
    pub fn reload<H: GalleryHost>(&mut self, host: &mut H) -> usize {
        log::info!("Manually reloading products...");
        self.catalog = Self::load_catalog(&self.store);
        self.render_products(host)
    }

    // --- FILTERS ---

    pub fn filter_by_category<H: PageHost>(&mut self, filter: CategoryFilter, host: &mut H) -> usize {
        apply_category_filter(&self.cards, filter, host)
    }

    /// Key-based variant for hosts holding a raw `data-category` string.
    /// Unknown keys are ignored.
    pub fn filter_by_category_key<H: PageHost>(&mut self, key: &str, host: &mut H) -> Option<usize> {
        match CategoryFilter::from_key(key) {
            Some(filter) => Some(self.filter_by_category(filter, host)),
            None => {
                log::warn!("Ignoring unknown category filter `{key}`");
                None
            }
        }
    }

    /// Show cards priced at or below `max_price`, bounded to the slider range.
    pub fn filter_by_price<H: PageHost>(&mut self, max_price: u32, host: &mut H) -> usize {
        apply_price_filter(&self.cards, GALLERY.price_slider.clamp(max_price), host)
    }

    // --- WISHLIST ---

    pub fn toggle_wishlist<H: GalleryHost>(&mut self, product_id: &str, host: &mut H) -> ToggleOutcome {
        let (outcome, written) = self.wishlist.toggle(product_id, &mut self.store);
        if let Err(e) = written {
            log::error!("Wishlist not saved to `{}`: {e}", STORAGE.wishlist);
        }

        match outcome {
            ToggleOutcome::Added => host.notify(UI_TEXT.wishlist_added, Severity::Success),
            ToggleOutcome::Removed => host.notify(UI_TEXT.wishlist_removed, Severity::Info),
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[wishlist] {product_id}: {outcome:?}");
        }
        self.sync_wishlist_buttons(host);
        outcome
    }

    /// Filled heart + active marker for wishlisted products, outline otherwise.
    pub fn sync_wishlist_buttons<H: PageHost>(&self, host: &mut H) {
        for (heart, product_id) in &self.hearts {
            let member = self.wishlist.contains(product_id);
            let icon = if member {
                UI_TEXT.heart_filled
            } else {
                UI_TEXT.heart_outline
            };
            host.set_text(heart, icon);
            host.set_class(heart, UI_CONFIG.active_class, member);
        }
    }

    // --- DETAIL / MEDIA ---

    /// Hand the product's details to the page modal.
    pub fn open_detail<H: GalleryHost>(&mut self, product_id: &str, host: &mut H) -> GalleryResult<()> {
        let product = find_product(&self.catalog, product_id)
            .ok_or_else(|| GalleryError::ProductNotFound(product_id.to_string()))?;
        host.open_package(&PackageDetail::from_product(product));
        Ok(())
    }

    /// Full-size video modal. Products without a video are a silent no-op.
    pub fn open_video_modal<H: PageHost>(&mut self, product_id: &str, host: &mut H) -> Option<ElementId> {
        let video = find_product(&self.catalog, product_id)?.video()?.to_string();
        let modal_id = self.next_overlay_id();
        let (html, bindings) = video_modal(&modal_id, &video);
        host.append_to_body(&modal_id, &html);
        self.bindings.extend(bindings);
        Some(modal_id)
    }

    pub fn open_lightbox<H: PageHost>(&mut self, path: &str, kind: MediaKind, host: &mut H) -> ElementId {
        let lightbox_id = self.next_overlay_id();
        let (html, bindings) = lightbox(&lightbox_id, path, kind);
        host.append_to_body(&lightbox_id, &html);
        self.bindings.extend(bindings);
        lightbox_id
    }

    pub fn close_overlay<H: PageHost>(&mut self, overlay: &ElementId, host: &mut H) {
        host.remove_element(overlay);
        self.bindings.forget(overlay);
    }

    fn next_overlay_id(&mut self) -> ElementId {
        let id = ElementId::new(format!("vp-overlay-{}", self.next_overlay));
        self.next_overlay += 1;
        id
    }

    // --- EVENTS ---

    /// Route a pointer event that started on `origin` through the bindings.
    /// Returns how many actions ran.
    pub fn handle_event<H: GalleryHost>(&mut self, origin: &ElementId, trigger: Trigger, host: &mut H) -> usize {
        let actions = self.bindings.resolve(origin, trigger);
        for action in &actions {
            self.dispatch(action, host);
        }
        actions.len()
    }

    /// Route an input event carrying the control's current value.
    pub fn handle_input<H: GalleryHost>(&mut self, origin: &ElementId, value: &str, host: &mut H) {
        for action in self.bindings.resolve(origin, Trigger::Input) {
            match action {
                Action::FilterPrice => match value.trim().parse::<u32>() {
                    Ok(max_price) => {
                        self.filter_by_price(max_price, host);
                    }
                    Err(_) => log::warn!("Ignoring non-numeric price slider value `{value}`"),
                },
                other => self.dispatch(&other, host),
            }
        }
    }

    pub fn dispatch<H: GalleryHost>(&mut self, action: &Action, host: &mut H) {
        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[ui] {action:?}");
        }

        match action {
            Action::OpenDetail { product_id } => {
                if let Err(e) = self.open_detail(product_id, host) {
                    log::error!("{e}");
                }
            }
            Action::ToggleWishlist { product_id } => {
                self.toggle_wishlist(product_id, host);
            }
            Action::FilterCategory(filter) => {
                self.filter_by_category(*filter, host);
            }
            Action::FilterPrice => {
                log::warn!("Price filter dispatched without a slider value");
            }
            Action::PlayProductVideo { product_id } => {
                self.open_video_modal(product_id, host);
            }
            Action::StartPreview { video, icon } => {
                host.play_media(video);
                if let Some(icon) = icon {
                    host.set_visible(icon, false);
                }
            }
            Action::StopPreview { video, icon } => {
                host.reset_media(video);
                if let Some(icon) = icon {
                    host.set_visible(icon, true);
                }
            }
            Action::OpenLightbox { path, kind } => {
                self.open_lightbox(path, *kind, host);
            }
            Action::CloseOverlay(overlay) => self.close_overlay(overlay, host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use crate::domain::Category;
    use crate::media::default_media_files;
    use crate::ui::filters::{filter_button_id, price_label_id, price_slider_id};
    use crate::ui::host::MemoryPage;
    use crate::ui::ui_render::card_id;

    const CATALOG: &str = r#"[
        {"id":"s1","name":"Sconce","price":15000,"category":"wall-sconces","images":["s1.webp"]},
        {"id":"c1","name":"Chandelier","price":25000,"category":"chandeliers","images":["c1.webp"],"video":"c1.mp4"},
        {"id":"x1","name":"Ghost","price":100,"images":[]},
        {"id":"t1","name":"Table Lamp","price":20000,"category":"table-lamps","images":[{"data":"t1.webp"}],
         "description":"Warm light"}
    ]"#;

    fn page() -> MemoryPage {
        MemoryPage::new()
            .with_section(GALLERY.section_selector)
            .with_container(GALLERY.grid_selector, "")
    }

    fn engine() -> GalleryEngine<MemoryStore> {
        GalleryEngine::new(MemoryStore::with_slot(STORAGE.products, CATALOG))
    }

    fn visible_cards(engine: &GalleryEngine<MemoryStore>, page: &MemoryPage) -> usize {
        engine
            .cards()
            .entries()
            .iter()
            .filter(|entry| page.is_visible(&entry.element))
            .count()
    }

    #[test]
    fn new_engine_holds_only_displayable_products() {
        let engine = engine();
        let ids: Vec<&str> = engine.catalog().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "c1", "t1"]);
    }

    #[test]
    fn start_renders_filters_and_hearts() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);

        assert_eq!(engine.cards().len(), 3);
        assert_eq!(page.inserted_before(GALLERY.grid_selector).len(), 1);
        assert_eq!(page.text_of(&card_id(0).child("heart")), Some(UI_TEXT.heart_outline));

        // Idempotent filter bar
        assert!(!engine.install_filters(&mut page));
    }

    #[test]
    fn start_without_target_renders_nothing() {
        let mut engine = engine();
        let mut page = MemoryPage::new();
        engine.start(&mut page);
        assert!(engine.cards().is_empty());
        assert!(page.inserted_before(GALLERY.grid_selector).is_empty());
    }

    #[test]
    fn heart_click_toggles_without_opening_detail() {
        let mut store = MemoryStore::with_slot(STORAGE.products, CATALOG);
        store.set(STORAGE.wishlist, r#"["t1"]"#).unwrap();
        let mut engine = GalleryEngine::new(store);
        let mut page = page();
        engine.start(&mut page);

        // t1 was wishlisted in a previous session
        let t1_heart = card_id(2).child("heart");
        assert_eq!(page.text_of(&t1_heart), Some(UI_TEXT.heart_filled));
        assert!(page.has_class(&t1_heart, "active"));

        let s1_heart = card_id(0).child("heart");
        assert_eq!(engine.handle_event(&s1_heart, Trigger::Click, &mut page), 1);
        assert!(page.opened.is_empty());
        assert!(engine.wishlist().contains("s1"));
        assert_eq!(page.text_of(&s1_heart), Some(UI_TEXT.heart_filled));
        assert_eq!(page.toasts.last(), Some(&(UI_TEXT.wishlist_added.to_string(), Severity::Success)));

        let stored: Vec<String> =
            serde_json::from_str(&engine.store().get(STORAGE.wishlist).unwrap()).unwrap();
        assert_eq!(stored, vec!["t1", "s1"]);

        engine.handle_event(&s1_heart, Trigger::Click, &mut page);
        assert!(!engine.wishlist().contains("s1"));
        assert_eq!(page.toasts.last().map(|t| t.1), Some(Severity::Info));
        assert!(!page.has_class(&s1_heart, "active"));
    }

    // Reads like a normal store, refuses every write
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> GalleryResult<()> {
            Err(GalleryError::Storage(format!("quota exceeded writing {key}")))
        }
    }

    #[test]
    fn failed_wishlist_write_still_toggles_and_notifies() {
        let mut engine =
            GalleryEngine::new(ReadOnlyStore(MemoryStore::with_slot(STORAGE.products, CATALOG)));
        let mut page = page();
        engine.start(&mut page);

        assert_eq!(engine.toggle_wishlist("s1", &mut page), ToggleOutcome::Added);
        assert!(engine.wishlist().contains("s1"));
        assert_eq!(
            page.toasts.last(),
            Some(&(UI_TEXT.wishlist_added.to_string(), Severity::Success))
        );
        assert_eq!(page.text_of(&card_id(0).child("heart")), Some(UI_TEXT.heart_filled));
        assert_eq!(engine.store().get(STORAGE.wishlist), None);

        assert_eq!(engine.toggle_wishlist("s1", &mut page), ToggleOutcome::Removed);
        assert!(!engine.wishlist().contains("s1"));
        assert_eq!(page.toasts.last().map(|t| t.1), Some(Severity::Info));
    }

    #[test]
    fn image_click_opens_detail() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);

        engine.handle_event(&card_id(2).child("image"), Trigger::Click, &mut page);
        assert_eq!(page.opened.len(), 1);
        let detail = &page.opened[0];
        assert_eq!(detail.title, "Table Lamp");
        assert_eq!(detail.price, "KES 20000.00");
        assert_eq!(detail.description, "Warm light");
        assert_eq!(detail.images, vec!["t1.webp"]);
    }

    #[test]
    fn unknown_product_detail_is_an_error() {
        let mut engine = engine();
        let mut page = page();
        assert_eq!(
            engine.open_detail("nope", &mut page),
            Err(GalleryError::ProductNotFound("nope".into()))
        );
        assert!(page.opened.is_empty());
    }

    #[test]
    fn more_like_this_filters_by_card_category() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);

        engine.handle_event(&card_id(0).child("more"), Trigger::Click, &mut page);
        assert_eq!(visible_cards(&engine, &page), 1);
        assert!(page.is_visible(&card_id(0)));
        assert!(page.has_class(
            &filter_button_id(CategoryFilter::Only(Category::WallSconces)),
            "active"
        ));

        engine.handle_event(&filter_button_id(CategoryFilter::All), Trigger::Click, &mut page);
        assert_eq!(visible_cards(&engine, &page), 3);
    }

    #[test]
    fn static_cards_take_part_in_filtering() {
        let mut engine = engine();
        let mut page = page();
        engine.register_static_card(CardEntry {
            element: ElementId::new("static-1"),
            category_key: "chandeliers".into(),
            price_text: "KES 8,000".into(),
        });
        engine.start(&mut page);

        engine.filter_by_category(CategoryFilter::Only(Category::Chandeliers), &mut page);
        assert!(page.is_visible(&ElementId::new("static-1")));
        assert_eq!(visible_cards(&engine, &page), 2);

        assert_eq!(engine.filter_by_category_key("garden", &mut page), None);
    }

    #[test]
    fn static_cards_present_at_start_join_filtering() {
        let mut engine = engine();
        let mut page = page();
        // Added by page scripts after the engine was built, before page-ready
        page.add_static_card(CardEntry {
            element: ElementId::new("static-late"),
            category_key: "table-lamps".into(),
            price_text: "KES 20,400".into(),
        });
        engine.start(&mut page);
        assert_eq!(engine.cards().len(), 4);

        engine.filter_by_category(CategoryFilter::Only(Category::TableLamps), &mut page);
        assert!(page.is_visible(&ElementId::new("static-late")));
        assert_eq!(visible_cards(&engine, &page), 2);
    }

    #[test]
    fn price_filter_between_slider_steps() {
        let mut engine = engine();
        let mut page = page();
        page.add_static_card(CardEntry {
            element: ElementId::new("static-20400"),
            category_key: "all".into(),
            price_text: "KES 20,400".into(),
        });
        engine.start(&mut page);

        assert_eq!(engine.filter_by_price(20_500, &mut page), 3);
        assert!(page.is_visible(&ElementId::new("static-20400")));
        assert_eq!(page.text_of(&price_label_id()), Some("KES 20,500"));

        assert_eq!(engine.filter_by_price(90_000, &mut page), 4);
        assert_eq!(page.text_of(&price_label_id()), Some("KES 50,000"));
    }

    #[test]
    fn slider_input_filters_by_price() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);

        engine.handle_input(&price_slider_id(), "20000", &mut page);
        assert_eq!(visible_cards(&engine, &page), 2);
        assert!(!page.is_visible(&card_id(1)));
        assert_eq!(page.text_of(&price_label_id()), Some("KES 20,000"));

        engine.handle_input(&price_slider_id(), "abc", &mut page);
        assert_eq!(visible_cards(&engine, &page), 2);
    }

    #[test]
    fn video_preview_and_modal() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);

        let overlay = card_id(1).child("overlay");
        let video = card_id(1).child("video");
        engine.handle_event(&overlay, Trigger::PointerEnter, &mut page);
        assert!(page.element(&video).is_some_and(|v| v.playing));
        engine.handle_event(&overlay, Trigger::PointerLeave, &mut page);
        let state = page.element(&video).unwrap();
        assert!(!state.playing);
        assert_eq!(state.rewinds, 1);

        // Clicking the playing video does not open the detail modal
        assert_eq!(engine.handle_event(&video, Trigger::Click, &mut page), 0);
        assert!(page.opened.is_empty());

        engine.handle_event(&card_id(1).child("indicator"), Trigger::Click, &mut page);
        assert_eq!(page.overlays().len(), 1);
        let modal = page.overlays()[0].0.clone();
        engine.handle_event(&modal.child("close"), Trigger::Click, &mut page);
        assert!(page.overlays().is_empty());
        assert!(!engine.bindings().knows(&modal.child("close")));

        assert_eq!(engine.open_video_modal("s1", &mut page), None);
    }

    #[test]
    fn media_gallery_and_lightbox() {
        let mut engine = engine();
        let mut page = MemoryPage::new().with_container(GALLERY.media_selector, "old");
        let files = default_media_files();
        assert!(engine.mount_media_gallery(&files, &mut page));
        assert!(!page.container(GALLERY.media_selector).unwrap().contains("old"));

        let image = ElementId::new("vp-media-0").child("media");
        engine.handle_event(&image, Trigger::Click, &mut page);
        assert_eq!(page.overlays().len(), 1);
        let lightbox = page.overlays()[0].0.clone();

        engine.handle_event(&lightbox.child("content"), Trigger::Click, &mut page);
        assert_eq!(page.overlays().len(), 1);
        engine.handle_event(&lightbox, Trigger::Click, &mut page);
        assert!(page.overlays().is_empty());

        let video_item = ElementId::new("vp-media-3");
        engine.handle_event(&video_item, Trigger::PointerEnter, &mut page);
        assert!(!page.is_visible(&video_item.child("icon")));
        engine.handle_event(&video_item, Trigger::PointerLeave, &mut page);
        assert!(page.is_visible(&video_item.child("icon")));

        assert!(!engine.mount_media_gallery(&files, &mut MemoryPage::new()));
    }

    #[test]
    fn reload_appends_another_copy() {
        let mut engine = engine();
        let mut page = page();
        engine.start(&mut page);
        assert_eq!(engine.reload(&mut page), 3);
        assert_eq!(engine.cards().len(), 6);
        assert!(page.container(GALLERY.grid_selector).unwrap().contains("vp-card-5"));
        // Earlier cards stay the same nodes, so their listeners survive
        assert!(!page.replaced.iter().any(|s| s == GALLERY.grid_selector));
    }

    #[test]
    fn absent_catalog_renders_default_sconce() {
        let mut engine = GalleryEngine::new(MemoryStore::new());
        let mut page = page();
        engine.start(&mut page);
        let html = page.container(GALLERY.grid_selector).unwrap();
        assert!(html.contains("Rustic Rope Wall Sconce"));
        assert!(html.contains("KES 2200.00"));
    }
}
