use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Product categories in the storefront.
/// Wire format is the kebab-case key (`wall-sconces`), matching the admin page.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    WallSconces,
    Chandeliers,
    TableLamps,
    OutdoorLighting,
    CustomDesigns,
}

impl Category {
    /// Wire/storage key, also used in `data-category` attributes
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Human label for badges and filter buttons
    pub fn label(&self) -> &'static str {
        match self {
            Category::WallSconces => "Wall Sconces",
            Category::Chandeliers => "Chandeliers",
            Category::TableLamps => "Table Lamps",
            Category::OutdoorLighting => "Outdoor Lighting",
            Category::CustomDesigns => "Custom Designs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Deserialize an optional category, treating unknown keys (and "") as absent.
/// An unknown key from the admin side should not throw away the whole catalog.
pub fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|key| {
        if key.is_empty() {
            return None;
        }
        match Category::from_str(&key) {
            Ok(category) => Some(category),
            Err(_) => {
                log::warn!("Unknown product category `{key}`, treating as uncategorised");
                None
            }
        }
    }))
}

/// The selection a category filter control stands for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    /// Parse a filter key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == Self::ALL_KEY {
            return Some(CategoryFilter::All);
        }
        Category::from_str(key).ok().map(CategoryFilter::Only)
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => category.key(),
        }
    }

    /// The filter a card's "more like this" link points at.
    pub fn for_product(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    /// Does a card recorded under `card_key` pass this filter?
    /// Cards are compared by key so statically authored cards (which only carry
    /// a `data-category` string) take part too.
    pub fn matches_key(&self, card_key: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category.key() == card_key,
        }
    }

    /// Every filter control in display order: "all" first, then each category.
    pub fn controls() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::iter().map(CategoryFilter::Only))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_kebab_case() {
        assert_eq!(Category::WallSconces.key(), "wall-sconces");
        assert_eq!(Category::OutdoorLighting.key(), "outdoor-lighting");
        assert_eq!(Category::from_str("custom-designs"), Ok(Category::CustomDesigns));
    }

    #[test]
    fn filter_keys_round_trip_through_controls() {
        for filter in CategoryFilter::controls() {
            assert_eq!(CategoryFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(CategoryFilter::controls().len(), 6);
        assert_eq!(CategoryFilter::from_key("lamps"), None);
    }

    #[test]
    fn all_matches_every_card_key() {
        assert!(CategoryFilter::All.matches_key("chandeliers"));
        assert!(CategoryFilter::All.matches_key("all"));
        let sconces = CategoryFilter::Only(Category::WallSconces);
        assert!(sconces.matches_key("wall-sconces"));
        assert!(!sconces.matches_key("all"));
        assert!(!sconces.matches_key("table-lamps"));
    }

    #[test]
    fn unknown_category_deserializes_as_absent() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "lenient_category")]
            category: Option<Category>,
        }

        let known: Holder = serde_json::from_str(r#"{"category":"chandeliers"}"#).unwrap();
        assert_eq!(known.category, Some(Category::Chandeliers));

        let unknown: Holder = serde_json::from_str(r#"{"category":"floor-lamps"}"#).unwrap();
        assert_eq!(unknown.category, None);

        let empty: Holder = serde_json::from_str(r#"{"category":""}"#).unwrap();
        assert_eq!(empty.category, None);

        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.category, None);
    }
}
