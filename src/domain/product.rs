use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::category::{Category, lenient_category};
use crate::domain::image_ref::ImageRef;

/// A product record as written by the admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque id, unique by convention only (first match wins on lookup)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Non-negative, currency-agnostic
    pub price: f64,
    /// `None` means uncategorised, shown under "all"
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub best_for: Option<String>,
    /// Display order matters
    #[serde(default, deserialize_with = "lenient_features")]
    pub features: Vec<String>,
    /// First entry is the cover image
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub video: Option<String>,
}

impl Product {
    /// The cover image, or `Missing` when there are no images at all
    pub fn primary_image(&self) -> &ImageRef {
        self.images.first().unwrap_or(&ImageRef::Missing)
    }

    /// Video location, ignoring empty strings
    pub fn video(&self) -> Option<&str> {
        self.video.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Every real image location, in display order
    pub fn image_locations(&self) -> Vec<&str> {
        self.images.iter().filter_map(ImageRef::location).collect()
    }
}

/// First product with this id.
pub fn find_product<'a>(products: &'a [Product], product_id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == product_id)
}

// Admin builds sometimes stamp ids from a timestamp and store them as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

// An explicit `null` list is stored by older admin builds; treat it like a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Null list or null entries: keep whatever text is there.
fn lenient_features<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<String>> = null_as_empty(deserializer)?;
    Ok(raw.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_admin_record() {
        let json = r#"{
            "id": 1717171717,
            "name": "Brass Chandelier",
            "price": 18500,
            "category": "chandeliers",
            "bestFor": "Dining rooms",
            "features": ["Six arms", "Dimmable"],
            "images": [{"data": "data:image/webp;base64,AAA"}, "assets/b.webp"],
            "video": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "1717171717");
        assert_eq!(product.category, Some(Category::Chandeliers));
        assert_eq!(product.best_for.as_deref(), Some("Dining rooms"));
        assert_eq!(product.features, vec!["Six arms", "Dimmable"]);
        assert_eq!(
            product.image_locations(),
            vec!["data:image/webp;base64,AAA", "assets/b.webp"]
        );
        assert_eq!(product.video(), None);
        assert!(product.description.is_none());
    }

    #[test]
    fn primary_image_is_missing_without_images() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Bare","price":10}"#).unwrap();
        assert_eq!(product.primary_image(), &ImageRef::Missing);
        assert!(product.features.is_empty());
    }

    #[test]
    fn null_lists_read_as_empty() {
        let product: Product = serde_json::from_str(
            r#"{"id":"n","name":"Nulls","price":3,"features":null,"images":null}"#,
        )
        .unwrap();
        assert!(product.features.is_empty());
        assert!(product.images.is_empty());

        let product: Product = serde_json::from_str(
            r#"{"id":"n","name":"Gaps","price":3,"features":["Dimmable",null,"Brass"]}"#,
        )
        .unwrap();
        assert_eq!(product.features, vec!["Dimmable", "Brass"]);
    }

    #[test]
    fn find_returns_first_match() {
        let first: Product =
            serde_json::from_str(r#"{"id":"dup","name":"First","price":1}"#).unwrap();
        let mut second = first.clone();
        second.name = "Second".into();
        let products = vec![first, second];
        assert_eq!(find_product(&products, "dup").map(|p| p.name.as_str()), Some("First"));
        assert!(find_product(&products, "nope").is_none());
    }
}
