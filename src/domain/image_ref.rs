//! Image references as they come out of storage.

use serde::{Deserialize, Serialize};

/// Substring the admin page writes into generated "No Image" placeholders
const PLACEHOLDER_MARKER: &str = "No Image";
/// Inline SVG data URLs are only ever used for placeholders
const INLINE_SVG_SIGNATURE: &str = "data:image/svg+xml";

/// Embedded grey "No Image" graphic used when a card has no real cover.
pub const PLACEHOLDER_GRAPHIC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300' viewBox='0 0 400 300'%3E%3Crect width='400' height='300' fill='%23ddd'/%3E%3Ctext x='200' y='150' text-anchor='middle' dy='.3em' fill='%23666' font-family='Arial' font-size='16'%3ENo Image%3C/text%3E%3C/svg%3E";

/// Storage shape: either a bare location or an upload wrapper carrying `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredImage {
    Location(String),
    Wrapped {
        #[serde(default)]
        data: Option<String>,
    },
    /// `null` entries left behind by deleted uploads
    Absent,
}

/// An image reference, classified once when it is read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredImage", into = "StoredImage")]
pub enum ImageRef {
    /// A usable image location (path, URL or raster data URL)
    Real(String),
    /// Nothing usable was stored
    Missing,
    /// A generated placeholder, not a real picture
    Placeholder,
}

impl ImageRef {
    pub fn classify(location: Option<&str>) -> Self {
        match location {
            None => ImageRef::Missing,
            Some("") => ImageRef::Missing,
            Some(loc) if loc.contains(PLACEHOLDER_MARKER) || loc.contains(INLINE_SVG_SIGNATURE) => {
                ImageRef::Placeholder
            }
            Some(loc) => ImageRef::Real(loc.to_string()),
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            ImageRef::Real(loc) => Some(loc),
            ImageRef::Missing | ImageRef::Placeholder => None,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, ImageRef::Real(_))
    }

    /// Location to put in an `<img src>`, falling back to the embedded placeholder.
    pub fn src_or_placeholder(&self) -> &str {
        self.location().unwrap_or(PLACEHOLDER_GRAPHIC)
    }
}

impl From<StoredImage> for ImageRef {
    fn from(stored: StoredImage) -> Self {
        match stored {
            StoredImage::Location(loc) => ImageRef::classify(Some(&loc)),
            StoredImage::Wrapped { data } => ImageRef::classify(data.as_deref()),
            StoredImage::Absent => ImageRef::Missing,
        }
    }
}

impl From<ImageRef> for StoredImage {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::Real(loc) => StoredImage::Location(loc),
            ImageRef::Missing | ImageRef::Placeholder => StoredImage::Location(String::new()),
        }
    }
}
