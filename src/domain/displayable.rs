//! Which products are safe to put on the page.

use std::fmt;

use crate::domain::image_ref::ImageRef;
use crate::domain::product::Product;

/// Why a product was kept off the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    NoImages,
    InvalidImage,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExclusionReason::NoImages => write!(f, "no images"),
            ExclusionReason::InvalidImage => write!(f, "invalid image"),
        }
    }
}

/// `None` when the product has a real cover image.
pub fn exclusion_reason(product: &Product) -> Option<ExclusionReason> {
    match product.images.first() {
        None => Some(ExclusionReason::NoImages),
        Some(ImageRef::Real(_)) => None,
        Some(ImageRef::Missing | ImageRef::Placeholder) => Some(ExclusionReason::InvalidImage),
    }
}

/// Keep only products with a real cover image, preserving order.
pub fn filter_displayable(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| match exclusion_reason(product) {
            None => true,
            Some(reason) => {
                log::info!("Filtering out product \"{}\" - {}", product.name, reason);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image_ref::PLACEHOLDER_GRAPHIC;

    fn product(id: &str, images: Vec<ImageRef>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: 100.0,
            category: None,
            description: None,
            best_for: None,
            features: Vec::new(),
            images,
            video: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn reasons_are_categorised() {
        assert_eq!(exclusion_reason(&product("a", vec![])), Some(ExclusionReason::NoImages));
        assert_eq!(
            exclusion_reason(&product("b", vec![ImageRef::Missing])),
            Some(ExclusionReason::InvalidImage)
        );
        assert_eq!(
            exclusion_reason(&product("c", vec![ImageRef::classify(Some(PLACEHOLDER_GRAPHIC))])),
            Some(ExclusionReason::InvalidImage)
        );
        assert_eq!(exclusion_reason(&product("d", vec![ImageRef::Real("d.webp".into())])), None);
    }

    #[test]
    fn only_the_cover_image_decides() {
        let later_real = product("e", vec![ImageRef::Placeholder, ImageRef::Real("e.webp".into())]);
        assert_eq!(exclusion_reason(&later_real), Some(ExclusionReason::InvalidImage));
    }

    #[test]
    fn filter_is_order_preserving_and_idempotent() {
        let input = vec![
            product("1", vec![ImageRef::Real("1.webp".into())]),
            product("2", vec![]),
            product("3", vec![ImageRef::Real("3.webp".into())]),
            product("4", vec![ImageRef::Placeholder]),
            product("5", vec![ImageRef::Real("5.webp".into())]),
        ];
        let once = filter_displayable(input);
        assert_eq!(ids(&once), vec!["1", "3", "5"]);

        let twice = filter_displayable(once.clone());
        assert_eq!(twice, once);
    }
}
