use crate::config::STORAGE;
use crate::data::store::KeyValueStore;
use crate::error::{GalleryError, GalleryResult};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_STORAGE;

/// Result of a wishlist toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Set of product ids the visitor marked as favourites.
/// Kept in insertion order so the stored array stays stable between toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    /// Read the wishlist slot. A missing or corrupt slot is an empty wishlist.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let ids = match store.get(STORAGE.wishlist) {
            Some(json) => serde_json::from_str::<Vec<String>>(&json).unwrap_or_else(|e| {
                log::warn!("Stored wishlist in `{}` is unreadable: {e}", STORAGE.wishlist);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut wishlist = Self::default();
        for id in ids {
            if !wishlist.contains(&id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.ids.iter().any(|id| id == product_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `product_id` and write the whole set back.
    /// Membership changes in memory even if the write fails; the error is returned
    /// so the caller can log it.
    pub fn toggle<S: KeyValueStore>(
        &mut self,
        product_id: &str,
        store: &mut S,
    ) -> (ToggleOutcome, GalleryResult<()>) {
        let outcome = match self.ids.iter().position(|id| id == product_id) {
            Some(index) => {
                self.ids.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.ids.push(product_id.to_string());
                ToggleOutcome::Added
            }
        };
        (outcome, self.persist(store))
    }

    fn persist<S: KeyValueStore>(&self, store: &mut S) -> GalleryResult<()> {
        let json = serde_json::to_string(&self.ids)
            .map_err(|e| GalleryError::Storage(e.to_string()))?;

        #[cfg(debug_assertions)]
        if PRINT_STORAGE {
            log::info!("Writing wishlist ({} ids) to `{}`", self.ids.len(), STORAGE.wishlist);
        }
        store.set(STORAGE.wishlist, &json)
    }
}
