//! Browser key-value slot names

/// Named slots in the persistent key-value store.
/// Values are JSON strings; the admin page owns writes to `products`.
pub struct StorageSlots {
    /// Serialized ordered sequence of products
    pub products: &'static str,
    /// Serialized ordered sequence of wishlisted product ids
    pub wishlist: &'static str,
}

pub const STORAGE: StorageSlots = StorageSlots {
    products: "vpower_products",
    wishlist: "vpower_wishlist",
};
