use std::collections::HashSet;

use crate::config::STORAGE;
use crate::data::store::KeyValueStore;
use crate::domain::{Category, ImageRef, Product};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CATALOG_LOAD;

/// Read-only view of the product catalog slot.
/// The admin page owns writes; nothing here mutates the slot.
pub struct CatalogStore;

impl CatalogStore {
    /// Load the stored catalog, falling back to the built-in products when the
    /// slot is absent, unreadable or empty.
    pub fn load<S: KeyValueStore>(store: &S) -> Vec<Product> {
        let stored = match store.get(STORAGE.products) {
            Some(json) => match serde_json::from_str::<Vec<Product>>(&json) {
                Ok(products) => {
                    #[cfg(debug_assertions)]
                    if PRINT_CATALOG_LOAD {
                        log::info!("Loaded {} products from storage", products.len());
                    }
                    products
                }
                Err(e) => {
                    log::warn!("Stored catalog in `{}` is unreadable: {e}", STORAGE.products);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if stored.is_empty() {
            #[cfg(debug_assertions)]
            if PRINT_CATALOG_LOAD {
                log::info!("Using default products for visitors");
            }
            return default_products();
        }

        warn_duplicate_ids(&stored);
        stored
    }
}

// Lookups stay first-match; this only makes the collision visible.
fn warn_duplicate_ids(products: &[Product]) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) && reported.insert(product.id.as_str()) {
            log::warn!(
                "Duplicate product id `{}`; detail lookups will use the first entry",
                product.id
            );
        }
    }
}

/// Products shown to every visitor when nothing has been published yet.
pub fn default_products() -> Vec<Product> {
    vec![Product {
        id: "default_2".to_string(),
        name: "Rustic Rope Wall Sconce".to_string(),
        price: 2200.00,
        category: Some(Category::WallSconces),
        description: Some(
            "A handcrafted wooden sconce featuring natural jute rope and a vintage filament bulb."
                .to_string(),
        ),
        best_for: Some("Bedrooms, hallways, Living rooms, Bnbs".to_string()),
        features: vec![
            "Natural jute rope accent".to_string(),
            "Vintage filament bulb included".to_string(),
            "Handcrafted wooden base".to_string(),
        ],
        images: vec![
            ImageRef::Real("assets/images/Rustic Rope Wall sconce/image.webp".to_string()),
            ImageRef::Real("assets/images/Rustic Rope Wall sconce/image (1).webp".to_string()),
            ImageRef::Real("assets/images/Rustic Rope Wall sconce/image (6).webp".to_string()),
        ],
        video: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::store::MemoryStore;
    use crate::domain::filter_displayable;

    #[test]
    fn absent_slot_yields_default_sconce() {
        let products = CatalogStore::load(&MemoryStore::new());
        assert_eq!(products.len(), 1);
        let sconce = &products[0];
        assert_eq!(sconce.name, "Rustic Rope Wall Sconce");
        assert_eq!(sconce.price, 2200.00);
        assert_eq!(sconce.category, Some(Category::WallSconces));
        assert!(sconce.primary_image().is_real());
    }

    #[test]
    fn stored_products_are_returned_in_order() {
        let json = r#"[
            {"id":"b","name":"Second","price":5,"images":["b.webp"]},
            {"id":"a","name":"First","price":7,"images":["a.webp"]}
        ]"#;
        let store = MemoryStore::with_slot(STORAGE.products, json);
        let products = CatalogStore::load(&store);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn empty_or_corrupt_slot_falls_back() {
        for raw in ["[]", "{not json", "{\"id\":\"x\"}", "null"] {
            let store = MemoryStore::with_slot(STORAGE.products, raw);
            assert_eq!(CatalogStore::load(&store), default_products(), "slot: {raw}");
        }
    }

    #[test]
    fn null_lists_only_affect_their_own_record() {
        let json = r#"[
            {"id":"good","name":"Good Lamp","price":9,"images":["g.webp"]},
            {"id":"bad","name":"Bad Lamp","price":9,"images":null}
        ]"#;
        let store = MemoryStore::with_slot(STORAGE.products, json);
        let products = CatalogStore::load(&store);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "bad"]);

        let shown = filter_displayable(products);
        let names: Vec<&str> = shown.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Good Lamp"]);
    }

    #[test]
    fn null_features_keep_the_stored_product() {
        let json = r#"[{"id":"f","name":"Plain Lamp","price":9,"features":null,"images":["f.webp"]}]"#;
        let store = MemoryStore::with_slot(STORAGE.products, json);
        let products = CatalogStore::load(&store);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Plain Lamp");
        assert!(products[0].features.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let json = r#"[
            {"id":"d","name":"One","price":1,"images":["1.webp"]},
            {"id":"d","name":"Two","price":2,"images":["2.webp"]}
        ]"#;
        let store = MemoryStore::with_slot(STORAGE.products, json);
        assert_eq!(CatalogStore::load(&store).len(), 2);
    }

    #[test]
    fn load_does_not_touch_the_slot() {
        let store = MemoryStore::with_slot(STORAGE.products, "[]");
        let _ = CatalogStore::load(&store);
        assert_eq!(store.get(STORAGE.products).as_deref(), Some("[]"));
    }
}
