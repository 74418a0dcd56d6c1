// Domain types and value objects
pub mod category;
pub mod displayable;
pub mod image_ref;
pub mod price;
pub mod product;

// Re-export commonly used types
pub use category::{Category, CategoryFilter};
pub use displayable::{ExclusionReason, exclusion_reason, filter_displayable};
pub use image_ref::{ImageRef, PLACEHOLDER_GRAPHIC};
pub use price::{format_price, format_price_label, parse_price_text};
pub use product::{Product, find_product};
