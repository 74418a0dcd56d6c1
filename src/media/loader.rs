use std::sync::LazyLock;

use regex::Regex;

use crate::config::MEDIA;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by lower-cased extension; `None` for anything else.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "mp4" | "webm" | "ogg" => Some(MediaKind::Video),
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(MediaKind::Image),
            _ => None,
        }
    }
}

/// A file in the media gallery folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    /// Folder + name, as referenced from the page
    pub path: String,
    pub kind: MediaKind,
    pub extension: String,
}

impl MediaFile {
    /// `None` when the extension isn't a supported image or video type.
    pub fn classify(folder: &str, name: &str) -> Option<Self> {
        let extension = name.rsplit_once('.')?.1.to_lowercase();
        let kind = MediaKind::from_extension(&extension)?;
        Some(Self {
            name: name.to_string(),
            path: format!("{folder}{name}"),
            kind,
            extension,
        })
    }

    pub fn title(&self) -> String {
        display_title(&self.name)
    }
}

/// The shipped media list, unsupported files dropped.
pub fn default_media_files() -> Vec<MediaFile> {
    MEDIA
        .files
        .iter()
        .filter_map(|name| MediaFile::classify(MEDIA.folder, name))
        .collect()
}

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpe?g|png|gif|webp|mp4|webm|ogg)$").unwrap());
static PHONE_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)WhatsApp (Image|Video) \d{4}-\d{2}-\d{2} at \d{1,2}\.\d{2}\.\d{2} (AM|PM)")
        .unwrap()
});
static SKETCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^image(\s*\(\d+\))?$").unwrap());
static COUNTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(\d+\)").unwrap());

/// Caption for a media file: phone-export names become "VPOWER Creation",
/// bare `image (n)` files become "Design Sketch", duplicate counters go.
pub fn display_title(file_name: &str) -> String {
    let stem = EXTENSION.replace(file_name, "");
    let stem = PHONE_EXPORT.replace(&stem, "VPOWER Creation");
    let stem = SKETCH.replace(stem.trim(), "Design Sketch");
    COUNTER.replace_all(&stem, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        let video = MediaFile::classify("g/", "Clip.MP4").unwrap();
        assert_eq!(video.kind, MediaKind::Video);
        assert_eq!(video.extension, "mp4");
        assert_eq!(video.path, "g/Clip.MP4");

        assert_eq!(MediaFile::classify("g/", "a.webp").unwrap().kind, MediaKind::Image);
        assert!(MediaFile::classify("g/", "notes.txt").is_none());
        assert!(MediaFile::classify("g/", "README").is_none());
    }

    #[test]
    fn titles_are_cleaned_up() {
        assert_eq!(
            display_title("WhatsApp Video 2026-02-10 at 2.53.43 PM (3).mp4"),
            "VPOWER Creation"
        );
        assert_eq!(
            display_title("WhatsApp Image 2026-02-10 at 5.12.17 PM.jpeg"),
            "VPOWER Creation"
        );
        assert_eq!(display_title("image (2).png"), "Design Sketch");
        assert_eq!(display_title("image.png"), "Design Sketch");
        assert_eq!(display_title("Brass pendant (1).jpg"), "Brass pendant");
    }

    #[test]
    fn shipped_list_is_fully_supported() {
        let files = default_media_files();
        assert_eq!(files.len(), MEDIA.files.len());
        assert_eq!(files.iter().filter(|f| f.kind == MediaKind::Image).count(), 8);
        assert!(files.iter().all(|f| f.path.starts_with("assets/gallery/")));
    }
}
