//! Category and price visibility filters.
//!
//! Both filters work over cards already on the page and only toggle
//! visibility. They are deliberately not composed: each call re-evaluates every
//! card from scratch against its own single criterion.

use itertools::Itertools;

use crate::config::GALLERY;
use crate::domain::{CategoryFilter, format_price_label, parse_price_text};
use crate::engine::Action;
use crate::ui::bindings::{BindingTable, ElementId, Scope, Trigger};
use crate::ui::config::UI_CONFIG;
use crate::ui::host::PageHost;
use crate::ui::ui_render::RenderedCard;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::html_escape;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// A card taking part in filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub element: ElementId,
    /// Recorded `data-category`, `"all"` when uncategorised
    pub category_key: String,
    /// Displayed price text, parsed on every price filter pass
    pub price_text: String,
}

/// Every card on the page in document order: statically authored ones the
/// host registered, then the rendered ones.
#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    entries: Vec<CardEntry>,
}

impl CardIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CardEntry) {
        self.entries.push(entry);
    }

    pub fn register_rendered(&mut self, cards: &[RenderedCard]) {
        self.entries.extend(cards.iter().map(|card| CardEntry {
            element: card.card.clone(),
            category_key: card.category_key.to_string(),
            price_text: card.price_text.clone(),
        }));
    }

    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Id of the filter button for `filter`
pub fn filter_button_id(filter: CategoryFilter) -> ElementId {
    ElementId::new(format!("vp-filter-{}", filter.key()))
}

pub fn price_slider_id() -> ElementId {
    ElementId::new(GALLERY.price_slider_id)
}

pub fn price_label_id() -> ElementId {
    ElementId::new(GALLERY.price_label_id)
}

/// Filter bar: one button per category control, then the price slider.
pub fn filter_bar() -> (String, BindingTable) {
    let mut bindings = BindingTable::new();
    let slider = &GALLERY.price_slider;

    let buttons = CategoryFilter::controls()
        .into_iter()
        .map(|filter| {
            let id = filter_button_id(filter);
            bindings.bind(&id, Trigger::Click, Action::FilterCategory(filter), Scope::Absorbing);
            let label = match filter {
                CategoryFilter::All => UI_TEXT.all_products,
                CategoryFilter::Only(category) => category.label(),
            };
            let active = if filter == CategoryFilter::All {
                format!(" {}", UI_CONFIG.active_class)
            } else {
                String::new()
            };
            format!(
                r#"<button class="category-filter{active}" id="{id}" data-category="{key}">{label}</button>"#,
                key = filter.key(),
                label = html_escape(label),
            )
        })
        .join("\n    ");

    let slider_id = price_slider_id();
    bindings.bind(&slider_id, Trigger::Input, Action::FilterPrice, Scope::Absorbing);

    let html = format!(
        r#"<div class="category-filters">
    {buttons}
    <div class="price-filter-container">
        <label for="{slider_id}">{price_label}</label>
        <input type="range" id="{slider_id}" min="{min}" max="{max}" value="{initial}" step="{step}">
        <span id="{label_id}">{initial_label}</span>
    </div>
</div>"#,
        price_label = UI_TEXT.price_label,
        min = slider.min,
        max = slider.max,
        initial = slider.initial,
        step = slider.step,
        label_id = GALLERY.price_label_id,
        initial_label = format_price_label(slider.initial),
    );
    (html, bindings)
}

/// Show cards matching `filter`, hide the rest, and move the active marker.
/// Returns how many cards are visible afterwards.
pub fn apply_category_filter<H: PageHost>(
    cards: &CardIndex,
    filter: CategoryFilter,
    host: &mut H,
) -> usize {
    let mut shown = 0;
    for entry in cards.entries() {
        let visible = filter.matches_key(&entry.category_key);
        host.set_visible(&entry.element, visible);
        shown += usize::from(visible);
    }

    for control in CategoryFilter::controls() {
        host.set_class(
            &filter_button_id(control),
            UI_CONFIG.active_class,
            control == filter,
        );
    }

    #[cfg(debug_assertions)]
    if PRINT_UI_INTERACTIONS {
        log::info!("[filter] category `{}`: {shown}/{} cards shown", filter.key(), cards.len());
    }
    shown
}

/// Show cards priced at or below `max_price`, hide the rest, and update the
/// slider label. Cards whose price text can't be read are hidden.
pub fn apply_price_filter<H: PageHost>(cards: &CardIndex, max_price: u32, host: &mut H) -> usize {
    host.set_text(&price_label_id(), &format_price_label(max_price));

    let mut shown = 0;
    for entry in cards.entries() {
        let visible = match parse_price_text(&entry.price_text) {
            Some(price) => price <= f64::from(max_price),
            None => {
                #[cfg(debug_assertions)]
                if PRINT_UI_INTERACTIONS {
                    log::debug!(
                        "[filter] unreadable price `{}` on {}, hiding",
                        entry.price_text,
                        entry.element
                    );
                }
                false
            }
        };
        host.set_visible(&entry.element, visible);
        shown += usize::from(visible);
    }

    #[cfg(debug_assertions)]
    if PRINT_UI_INTERACTIONS {
        log::info!("[filter] price <= {max_price}: {shown}/{} cards shown", cards.len());
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::ui::host::MemoryPage;

    fn entry(id: &str, category: &str, price: &str) -> CardEntry {
        CardEntry {
            element: ElementId::new(id),
            category_key: category.into(),
            price_text: price.into(),
        }
    }

    fn index() -> CardIndex {
        let mut cards = CardIndex::new();
        cards.register(entry("a", "wall-sconces", "KES 15,000"));
        cards.register(entry("b", "chandeliers", "KES 20000.00"));
        cards.register(entry("c", "wall-sconces", "KES 25000.00"));
        cards.register(entry("d", "all", "KES 900.00"));
        cards
    }

    fn visible(page: &MemoryPage, cards: &CardIndex) -> Vec<String> {
        cards
            .entries()
            .iter()
            .filter(|e| page.is_visible(&e.element))
            .map(|e| e.element.to_string())
            .collect()
    }

    #[test]
    fn category_filter_shows_exact_matches() {
        let cards = index();
        let mut page = MemoryPage::new();
        let shown = apply_category_filter(&cards, CategoryFilter::Only(Category::WallSconces), &mut page);
        assert_eq!(shown, 2);
        assert_eq!(visible(&page, &cards), vec!["a", "c"]);

        let sconces = filter_button_id(CategoryFilter::Only(Category::WallSconces));
        assert!(page.has_class(&sconces, "active"));
        assert!(!page.has_class(&filter_button_id(CategoryFilter::All), "active"));
    }

    #[test]
    fn all_shows_everything_after_any_prior_state() {
        let cards = index();
        let mut page = MemoryPage::new();
        apply_price_filter(&cards, 0, &mut page);
        assert!(visible(&page, &cards).is_empty());

        let shown = apply_category_filter(&cards, CategoryFilter::All, &mut page);
        assert_eq!(shown, 4);
        assert!(page.has_class(&filter_button_id(CategoryFilter::All), "active"));
    }

    #[test]
    fn price_filter_is_inclusive() {
        let mut cards = CardIndex::new();
        cards.register(entry("p15", "all", "KES 15000.00"));
        cards.register(entry("p20", "all", "KES 20000.00"));
        cards.register(entry("p25", "all", "KES 25000.00"));
        let mut page = MemoryPage::new();

        assert_eq!(apply_price_filter(&cards, 20_000, &mut page), 2);
        assert_eq!(visible(&page, &cards), vec!["p15", "p20"]);
        assert_eq!(page.text_of(&price_label_id()), Some("KES 20,000"));
    }

    #[test]
    fn filters_do_not_compose() {
        let cards = index();
        let mut page = MemoryPage::new();
        apply_category_filter(&cards, CategoryFilter::Only(Category::Chandeliers), &mut page);
        // Price pass ignores the category selection entirely
        apply_price_filter(&cards, 50_000, &mut page);
        assert_eq!(visible(&page, &cards).len(), 4);
    }

    #[test]
    fn unreadable_price_is_hidden() {
        let mut cards = CardIndex::new();
        cards.register(entry("odd", "all", "Price on request"));
        let mut page = MemoryPage::new();
        assert_eq!(apply_price_filter(&cards, 50_000, &mut page), 0);
        assert!(!page.is_visible(&ElementId::new("odd")));
    }

    #[test]
    fn filter_bar_wires_every_control() {
        let (html, bindings) = filter_bar();
        assert!(html.contains(r#"id="vp-filter-all" data-category="all">All Products</button>"#));
        assert!(html.contains(r#"min="0" max="50000" value="50000" step="1000""#));
        assert!(html.contains("KES 50,000"));
        for filter in CategoryFilter::controls() {
            assert_eq!(
                bindings.resolve(&filter_button_id(filter), Trigger::Click),
                vec![Action::FilterCategory(filter)]
            );
        }
        assert_eq!(
            bindings.resolve(&price_slider_id(), Trigger::Input),
            vec![Action::FilterPrice]
        );
    }
}
